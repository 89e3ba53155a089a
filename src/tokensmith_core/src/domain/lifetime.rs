use thiserror::Error;

pub const DEFAULT_NOT_BEFORE_SECONDS: i64 = 2;
pub const DEFAULT_EXPIRES_IN_SECONDS: i64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifetimeError {
    #[error("Not-before offset must not be negative, got {0}s")]
    NegativeNotBefore(i64),
    #[error("Expiry offset ({expires_in}s) must be greater than not-before offset ({not_before}s)")]
    EmptyWindow { not_before: i64, expires_in: i64 },
}

/// Offsets from issuance time that bound a token's validity window.
///
/// Always satisfies `0 <= not_before < expires_in`, so every issued token has
/// `nbf < exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetime {
    not_before: i64,
    expires_in: i64,
}

impl TokenLifetime {
    pub fn try_new(not_before: i64, expires_in: i64) -> Result<Self, LifetimeError> {
        if not_before < 0 {
            return Err(LifetimeError::NegativeNotBefore(not_before));
        }
        if expires_in <= not_before {
            return Err(LifetimeError::EmptyWindow {
                not_before,
                expires_in,
            });
        }

        Ok(Self {
            not_before,
            expires_in,
        })
    }

    pub fn not_before(&self) -> i64 {
        self.not_before
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

impl Default for TokenLifetime {
    fn default() -> Self {
        Self {
            not_before: DEFAULT_NOT_BEFORE_SECONDS,
            expires_in: DEFAULT_EXPIRES_IN_SECONDS,
        }
    }
}
