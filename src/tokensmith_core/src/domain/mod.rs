pub mod claims;
pub mod context;
pub mod credential;
pub mod headers;
pub mod lifetime;
pub mod method;
pub mod request;
pub mod response;
pub mod route;
pub mod token;
pub mod token_error;
