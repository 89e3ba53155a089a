//! Axum-specific routes.
//!
//! These use Axum's extractors to build the core request, call the
//! framework-agnostic handler, and convert its response back.

pub mod invoke;

pub use invoke::{REQUEST_ID_HEADER, invoke};
