use thiserror::Error;

/// Why a token failed to decode.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, disallowed algorithm or malformed structure.
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Token is not yet valid")]
    NotYetValid,
    #[error("Token has expired")]
    Expired,
}

impl TokenError {
    /// True for failures caused by the validity window rather than the token itself.
    pub fn is_temporal(&self) -> bool {
        matches!(self, TokenError::NotYetValid | TokenError::Expired)
    }
}
