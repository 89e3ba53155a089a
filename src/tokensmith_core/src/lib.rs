pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    claims::TokenClaims,
    context::InvocationContext,
    credential::{BEARER_SCHEME, BearerCredential, CredentialError},
    headers::Headers,
    lifetime::{LifetimeError, TokenLifetime},
    method::{Method, MethodError},
    request::{NormalizedRequest, Request},
    response::Response,
    route::Route,
    token::SignedToken,
    token_error::TokenError,
};

pub use ports::clock::{Clock, FixedClock};

pub use strategies::token_engine::{EncodeError, TokenEngine};
