//! Axum integration for the tokensmith handler.
//!
//! The handler in `tokensmith_application` is transport-agnostic. This crate
//! converts Axum requests into [`tokensmith_core::Request`] values and core
//! responses back into Axum responses.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  tokensmith_core: Request / Response     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  tokensmith_axum: Axum conversions       │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponse newtype wrapper          │
//! │  - catch-all invoke route                │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokensmith_axum::routes;
//!
//! let app = Router::new()
//!     .fallback(routes::invoke::<JwtTokenEngine, SystemClock>)
//!     .with_state(Arc::new(handler));
//! ```
//!
//! Routing is left to the handler, so every path goes through the one route.

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumAdapterError, AxumRequest, AxumResponse, BODY_LIMIT};
