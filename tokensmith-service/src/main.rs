use color_eyre::eyre::Result;
use tokensmith::{JwtTokenEngine, SystemClock, TokenHandler, TokenService, TokenServiceSetting};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = TokenServiceSetting::load()?;

    let token_engine = JwtTokenEngine::new(&config.jwt_config()?);
    let handler = TokenHandler::new(token_engine, SystemClock);

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting token service...");

    TokenService::new(handler).run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
