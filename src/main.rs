//! Rolodex: a profile collection web form.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from the environment, connects to the database and ensures
//! the schema exists, sets up the Axum router, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rolodex::config::{AppConfig, DEFAULT_LOG_FILTER};
use rolodex::routes::create_router;
use rolodex::state::AppState;
use rolodex::storage::Storage;
use rolodex::templates::init_templates;

/// Rolodex: a web form for collecting profiles
#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about)]
struct Args {
    /// Log level filter (e.g., "rolodex=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        db_host = %config.database.host,
        db_name = %config.database.name,
        "Loaded configuration"
    );

    // Connect to the database and ensure the profiles table exists before
    // accepting any traffic. A storage failure here is fatal.
    let storage = Storage::connect(&config.database.url()).await?;
    storage.ensure_schema().await?;
    tracing::info!("Connected to database");

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(tera, storage.clone());
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .expect("Invalid HOST or PORT value");
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the connection so in-flight queries finish cleanly.
    storage.close().await?;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves when SIGTERM or ctrl-c is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
