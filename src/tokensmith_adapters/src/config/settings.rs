use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;
use tokensmith_core::{
    LifetimeError, TokenLifetime,
    domain::lifetime::{DEFAULT_EXPIRES_IN_SECONDS, DEFAULT_NOT_BEFORE_SECONDS},
};

use super::constants::{SETTINGS_FILE, env, prod};
use crate::token_engine::JwtConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("The token signing secret must not be empty")]
    EmptySecret,
    #[error("Invalid token lifetime: {0}")]
    Lifetime(#[from] LifetimeError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenServiceSetting {
    pub application: ApplicationSetting,
    pub token: TokenSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSetting {
    pub secret: Secret<String>,
    pub not_before_seconds: i64,
    pub expires_in_seconds: i64,
}

impl TokenServiceSetting {
    /// Load settings from, in increasing precedence: built-in defaults, the
    /// optional settings file, `TOKENSMITH__*` variables and `JWT_SECRET`.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .separator(env::SETTINGS_ENV_SEPARATOR),
            )
            .set_override_option("token.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?;

        Self::from_builder(builder)
    }

    /// Load settings from a JSON document layered over the defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Self::from_builder(Self::defaults()?.add_source(File::from_str(json, FileFormat::Json)))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("token.not_before_seconds", DEFAULT_NOT_BEFORE_SECONDS)?
            .set_default("token.expires_in_seconds", DEFAULT_EXPIRES_IN_SECONDS)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Self = builder.build()?.try_deserialize()?;

        if settings.token.secret.expose_secret().is_empty() {
            return Err(SettingsError::EmptySecret);
        }
        settings.token.lifetime()?;

        Ok(settings)
    }

    pub fn jwt_config(&self) -> Result<JwtConfig, SettingsError> {
        Ok(JwtConfig::new(
            self.token.secret.clone(),
            self.token.lifetime()?,
        ))
    }
}

impl TokenSetting {
    pub fn lifetime(&self) -> Result<TokenLifetime, LifetimeError> {
        TokenLifetime::try_new(self.not_before_seconds, self.expires_in_seconds)
    }
}
