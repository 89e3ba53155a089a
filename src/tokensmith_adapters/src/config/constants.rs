pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    /// Prefix for all other settings, e.g. `TOKENSMITH__APPLICATION__ADDRESS`.
    pub const SETTINGS_ENV_PREFIX: &str = "TOKENSMITH";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

/// Optional settings file, looked up relative to the working directory.
pub const SETTINGS_FILE: &str = "config/settings";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
