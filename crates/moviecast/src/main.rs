mod app;
mod config;
mod handlers;
#[cfg(any(test, not(feature = "dynamodb")))]
mod mock_data;
mod state;
mod storage;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::{Config, LogFormat},
    state::AppState,
};

/// MovieCast - Read-only movie and cast lookups over DynamoDB
#[derive(Parser, Debug)]
#[command(name = "moviecast")]
#[command(version, about, long_about = None)]
#[cfg_attr(feature = "lambda", allow(dead_code))]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(config.log_format);

    tracing::info!(
        movies_table = %config.movies_table_name,
        cast_table = %config.cast_table_name,
        cast_role_index = %config.cast_role_index_name,
        region = %config.region,
        endpoint_url = ?config.endpoint_url,
        "Configuration loaded"
    );

    let state = init_state(&config).await;
    let app = create_app(state);

    serve(app, &cli).await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "moviecast=debug,tower_http=debug".into()),
    );

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[cfg(feature = "dynamodb")]
async fn init_state(config: &Config) -> AppState {
    AppState::from_config(config).await
}

#[cfg(not(feature = "dynamodb"))]
async fn init_state(_config: &Config) -> AppState {
    tracing::warn!("Built without the dynamodb feature, serving demo data");
    AppState::with_demo_data()
}

#[cfg(not(feature = "lambda"))]
async fn serve(app: Router, cli: &Cli) -> Result<()> {
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "lambda")]
async fn serve(app: Router, _cli: &Cli) -> Result<()> {
    tracing::info!("Serving through the Lambda runtime");
    lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
#[cfg(not(feature = "lambda"))]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
