use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lifetime::TokenLifetime, token_error::TokenError};

/// Claims carried by every issued token.
///
/// `data` is the caller's payload, untouched. `nbf` and `exp` are Unix
/// timestamps in seconds; the token is valid for `nbf <= now < exp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub data: Value,
    pub exp: i64,
    pub nbf: i64,
}

impl TokenClaims {
    /// Wrap `payload` with a validity window starting from `now`.
    pub fn issue(payload: Value, now: i64, lifetime: TokenLifetime) -> Self {
        Self {
            data: payload,
            exp: now.saturating_add(lifetime.expires_in()),
            nbf: now.saturating_add(lifetime.not_before()),
        }
    }

    /// Check the validity window. Not-yet-valid takes precedence over expired.
    pub fn check_window(&self, now: i64) -> Result<(), TokenError> {
        if now < self.nbf {
            return Err(TokenError::NotYetValid);
        }
        if now >= self.exp {
            return Err(TokenError::Expired);
        }
        Ok(())
    }

    pub fn into_data(self) -> Value {
        self.data
    }
}
