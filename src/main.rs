//! users-api server: reads config, bootstraps the `users` table, serves on port 8000.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use users_api::config::{BIND_ADDR, DEFAULT_LOG_FILTER};
use users_api::{app_router, connect, ensure_users_table, AppState, Config, PgUserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
    tracing::info!(?config, "configuration loaded");

    let pool = connect(&config).await?;
    // Serving against a missing table is not allowed; any failure here ends the process.
    ensure_users_table(&pool).await?;

    let app = app_router(AppState::new(PgUserStore::new(pool.clone())));
    let listener = TcpListener::bind(BIND_ADDR).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}
