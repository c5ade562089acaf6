//! Binary entry point for the weather forecast API server.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use forecast_api::config::Config;
use forecast_api::{cli, logging, routes};
use forecast_core::provider::openweather::OpenWeatherProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Startup failures surface here and abort before the listener binds.
    let config = Config::load(&args).context("failed to load configuration")?;
    logging::init(&config.log.level, &config.log.format);

    let provider = OpenWeatherProvider::new(config.apikey.clone());
    let state = routes::AppState::new(Arc::new(provider));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("APP is listening on port: {}", config.port);
    axum::serve(listener, app).await.context("http server error")?;

    Ok(())
}
