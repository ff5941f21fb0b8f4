//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, store selection and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{MemoryLinkRepository, database};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool, or the in-memory store when `APP_SKIP_DB` is set
/// - Apply migrations (when `APP_RUN_MIGRATIONS` is set)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the link store and wires the services around it.
async fn build_state(config: &Config) -> Result<AppState> {
    let settings = config.shortener_settings();

    if config.skip_db {
        tracing::warn!("Database skipped, links are kept in memory only");
        return Ok(AppState::in_memory(
            MemoryLinkRepository::new(),
            config.app_env.clone(),
            settings,
        ));
    }

    let pool = database::connect(config).await?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        database::migrate(&pool).await?;
    }

    Ok(AppState::postgres(
        Arc::new(pool),
        config.app_env.clone(),
        settings,
    ))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Terminate signal received, starting graceful shutdown");
}
