use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tour_management_api::{config, routes};

#[derive(Parser)]
#[command(name = "tour-management-api")]
#[command(about = "Tour Management API server")]
#[command(version)]
struct Args {
    #[arg(long, help = "Interface to bind (overrides TOUR_API_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides TOUR_API_PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up TOUR_API_PORT, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = config::config().clone();
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.default_filter)),
        )
        .init();

    tracing::info!("Starting Tour Management API in {:?} mode", config.environment);

    let bind_addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Tour Management API listening on http://{}", bind_addr);

    axum::serve(listener, routes::app_with_config(&config)).await.context("server error")?;

    Ok(())
}
