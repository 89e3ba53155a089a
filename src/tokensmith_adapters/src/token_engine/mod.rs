pub mod jwt_token_engine;

pub use jwt_token_engine::{ALGORITHM, JwtConfig, JwtTokenEngine};
