//! Infrastructure adapters: the JWT token engine, the system clock,
//! configuration loading and the JSON event invocation shell.

pub mod clock;
pub mod config;
pub mod handlers;
pub mod token_engine;

pub use clock::SystemClock;
pub use config::{SettingsError, TokenServiceSetting};
pub use handlers::{InvocationError, handle_event};
pub use token_engine::{ALGORITHM, JwtConfig, JwtTokenEngine};
