//! Framework-agnostic invocation shells.
//!
//! These accept a serialized invocation event, run it through the
//! [`TokenHandler`](tokensmith_application::TokenHandler) and serialize the result.

pub mod invoke;

pub use invoke::{InvocationError, handle_event};
