use serde_json::Value;
use thiserror::Error;

use crate::domain::{token::SignedToken, token_error::TokenError};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Trait for issuing and checking signed, time-bound tokens.
///
/// Implementations hold an immutable signing secret and a single accepted
/// algorithm. Both operations take the caller's clock reading so that a whole
/// invocation works against one instant.
pub trait TokenEngine: Send + Sync {
    /// Sign `payload` into a token valid from `now + not_before` until `now + expires_in`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Signing`] if the signing backend fails.
    fn encode(&self, payload: Value, now: i64) -> Result<SignedToken, EncodeError>;

    /// Verify `token` and return its embedded payload.
    ///
    /// Checks run in order: signature and algorithm, then not-before, then
    /// expiry. The first failure is returned.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidSignature`] if the token is malformed, uses a
    ///   different algorithm or fails signature verification
    /// - [`TokenError::NotYetValid`] if `now < nbf`
    /// - [`TokenError::Expired`] if `now >= exp`
    fn decode(&self, token: &str, now: i64) -> Result<Value, TokenError>;
}
