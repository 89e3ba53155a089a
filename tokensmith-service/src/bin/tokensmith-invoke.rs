//! Run one invocation: read a JSON event from stdin, print the JSON response.
//!
//! ```text
//! echo '{"httpMethod":"GET","path":"/","headers":{},"body":null}' | tokensmith-invoke
//! ```

use std::io::Read;

use color_eyre::eyre::Result;
use tokensmith::{
    InvocationContext, JwtTokenEngine, SystemClock, TokenHandler, TokenServiceSetting,
    handle_event,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = TokenServiceSetting::load()?;
    let handler = TokenHandler::new(JwtTokenEngine::new(&config.jwt_config()?), SystemClock);

    let mut event = String::new();
    std::io::stdin().read_to_string(&mut event)?;

    let context = InvocationContext::new(Uuid::new_v4().to_string());
    let response = handle_event(&handler, &event, &context)?;
    println!("{response}");

    Ok(())
}

fn init_tracing() -> Result<()> {
    // stdout carries the response, so logs go to stderr.
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
