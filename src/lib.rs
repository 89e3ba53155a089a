//! # Tokensmith - Token Issuing and Verification Library
//!
//! This is a facade crate that re-exports all public APIs from the tokensmith components.
//! Use this crate to issue and verify short-lived signed tokens from one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tokensmith = { path = "../tokensmith" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Request`, `Response`, `TokenClaims`, `TokenLifetime`, etc.
//! - **Ports**: `Clock`, `TokenEngine`
//! - **Use cases**: `IssueTokenUseCase`, `VerifyTokenUseCase` and the `TokenHandler`
//! - **Adapters**: `JwtTokenEngine`, `SystemClock`, settings and the JSON event shell
//! - **Service**: `TokenService` - HTTP front for the handler

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use tokensmith_core::*;
}

// Re-export most commonly used core types at the root level
pub use tokensmith_core::{
    InvocationContext, Method, Request, Response, Route, SignedToken, TokenClaims, TokenError,
    TokenLifetime,
};

// ============================================================================
// Ports
// ============================================================================

pub use tokensmith_core::{Clock, EncodeError, FixedClock, TokenEngine};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use tokensmith_application::*;
}

pub use tokensmith_application::{ApiError, TokenHandler};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Configuration
    pub mod config {
        pub use tokensmith_adapters::config::*;
    }

    /// JSON event invocation
    pub mod handlers {
        pub use tokensmith_adapters::handlers::*;
    }

    /// Axum request and response conversions
    pub mod axum {
        pub use tokensmith_axum::*;
    }
}

pub use tokensmith_adapters::{
    InvocationError, JwtConfig, JwtTokenEngine, SettingsError, SystemClock, TokenServiceSetting,
    handle_event,
};

// ============================================================================
// Token Service (Main Entry Point)
// ============================================================================

/// HTTP token service
pub use tokensmith_service::TokenService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
