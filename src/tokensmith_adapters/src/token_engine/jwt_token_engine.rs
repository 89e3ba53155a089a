use std::collections::HashSet;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tokensmith_core::{
    EncodeError, SignedToken, TokenClaims, TokenEngine, TokenError, TokenLifetime,
};

/// The only algorithm tokens are signed with and accepted under.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub lifetime: TokenLifetime,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>, lifetime: TokenLifetime) -> Self {
        Self {
            jwt_secret,
            lifetime,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// HMAC-signed JWT implementation of [`TokenEngine`].
///
/// Keys are derived from the secret once at construction; the secret itself
/// is not retained.
#[derive(Clone)]
pub struct JwtTokenEngine {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: TokenLifetime,
}

impl JwtTokenEngine {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: validation(),
            lifetime: config.lifetime,
        }
    }
}

// Signature and algorithm only. The validity window is checked against the
// invocation clock in `decode`, not against the library's own clock.
// Presence of `exp` and `nbf` is enforced by deserializing into
// `TokenClaims`: the library's own numeric claim parsing does not understand
// arbitrary-precision numbers.
fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();
    validation
}

impl TokenEngine for JwtTokenEngine {
    #[tracing::instrument(name = "JwtTokenEngine::encode", skip_all)]
    fn encode(&self, payload: Value, now: i64) -> Result<SignedToken, EncodeError> {
        let claims = TokenClaims::issue(payload, now, self.lifetime);

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map(SignedToken::new)
            .map_err(|e| EncodeError::Signing(e.to_string()))
    }

    #[tracing::instrument(name = "JwtTokenEngine::decode", skip_all)]
    fn decode(&self, token: &str, now: i64) -> Result<Value, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| {
                tracing::debug!(%error, "Token failed signature validation");
                TokenError::InvalidSignature
            })?;

        claims.check_window(now)?;

        Ok(claims.into_data())
    }
}
