// Main entry point for the listing service

use std::sync::Arc;

use anyhow::{Context, Result};
use listing_core::{
    kernel::{connect_database, connect_nats, run_migrations, NatsClientPublisher, ServerDeps},
    server::build_app,
    Config,
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directives().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        port = config.port,
        debug = config.debug,
        "Starting listing service"
    );

    // Connect to database
    let pool = connect_database(&config.database_url).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database ready");

    // Connect to NATS (shared by all requests)
    let nats_client = connect_nats(&config.nats_url).await?;
    tracing::info!(url = %config.nats_url, "NATS client initialised");

    let deps = ServerDeps::new(pool, Arc::new(NatsClientPublisher::new(nats_client)));
    let app = build_app(deps.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Publishes are only queued; flush them before the process exits
    deps.shutdown().await;
    tracing::info!("Listing service shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
