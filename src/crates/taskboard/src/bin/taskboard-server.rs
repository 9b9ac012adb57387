//! Taskboard server binary
//!
//! Standalone HTTP server exposing the in-memory task store as a REST API.

use std::net::SocketAddr;
use std::sync::Arc;

use taskboard::api::create_router;
use taskboard::config::ServerConfig;
use taskboard::store::MemoryTaskStore;
use taskboard::version::VERSION;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    tracing::info!("taskboard-server v{}", VERSION);

    // Load configuration, falling back to defaults when no file is present
    let config = match ServerConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load configuration file: {}. Using defaults.", e);
            ServerConfig::default()
        }
    };

    // Environment variables override the file
    let host = std::env::var("HOST").unwrap_or(config.host);
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| config.port.to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // All task state lives in memory; every start begins from the seed data
    let store = Arc::new(MemoryTaskStore::with_seed_tasks());

    let app = create_router(store);

    tracing::info!("Starting taskboard server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Taskboard server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
