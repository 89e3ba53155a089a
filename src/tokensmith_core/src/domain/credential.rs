use thiserror::Error;

pub const BEARER_SCHEME: &str = "Bearer";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Authorization header must be `Bearer <token>`")]
    BadScheme,
}

/// The token part of an `Authorization: Bearer <token>` header.
#[derive(PartialEq, Eq)]
pub struct BearerCredential<'a> {
    token: &'a str,
}

impl<'a> BearerCredential<'a> {
    /// Parse an authorization header value.
    ///
    /// The value must split on whitespace into exactly two parts, the first of
    /// which is `Bearer` (case-sensitive).
    pub fn parse(value: &'a str) -> Result<Self, CredentialError> {
        let mut parts = value.split_whitespace();

        match (parts.next(), parts.next(), parts.next()) {
            (Some(BEARER_SCHEME), Some(token), None) => Ok(Self { token }),
            _ => Err(CredentialError::BadScheme),
        }
    }

    pub fn token(&self) -> &'a str {
        self.token
    }
}

impl std::fmt::Debug for BearerCredential<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerCredential")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
