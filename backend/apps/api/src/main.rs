//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::sync::Arc;

use anyhow::Context;
use api::config::{AppConfig, HeroStoreKind};
use api::{ENDPOINTS, build_app};
use auth::{AuthConfig, InMemorySessionRegistry, SweepSessionsUseCase, load_credentials};
use hero::{InMemoryHeroRepository, MIGRATOR, PgHeroRepository};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,hero=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let auth_config = AuthConfig::default();

    let credentials = load_credentials(&config.credentials_file)?;
    let sessions = InMemorySessionRegistry::new(auth_config.token_ttl_chrono());

    let app = match config.hero_store {
        HeroStoreKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(25)
                .min_connections(5)
                .max_lifetime(Duration::from_secs(5 * 60))
                .connect_with(config.database.connect_options())
                .await
                .with_context(|| {
                    format!(
                        "failed to connect to database {} at {}:{}",
                        config.database.name, config.database.host, config.database.port
                    )
                })?;

            tracing::info!("Connected to database");

            // Run migrations
            MIGRATOR.run(&pool).await?;

            tracing::info!("Migrations completed");

            build_app(PgHeroRepository::new(pool), sessions.clone(), credentials)
        }
        HeroStoreKind::Memory => {
            tracing::warn!("Using in-memory hero store; changes are lost on restart");
            build_app(InMemoryHeroRepository::seeded(), sessions.clone(), credentials)
        }
    };

    // Expired-token sweep, stopped after the server drains
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SweepSessionsUseCase::new(Arc::new(sessions), auth_config.sweep_interval)
        .spawn(shutdown_rx);

    // Start server
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    for endpoint in ENDPOINTS {
        tracing::info!("  {endpoint}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    sweeper.await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
