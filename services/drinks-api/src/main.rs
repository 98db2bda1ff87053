//! Drinks API server binary

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use drinks_api::{build_router, AppState, Config};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use roastery_db::{DrinkRepository, MemoryDrinkRepository, PgDrinkRepository};
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("drinks_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Drinks API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        http_port = config.http_port,
        issuer = %config.auth.issuer,
        audience = %config.auth.audience,
        "Configuration loaded"
    );

    // Initialize metrics
    let metrics_handle = if config.metrics_enabled {
        Some(setup_metrics()?)
    } else {
        None
    };

    let drinks = open_store(&config).await?;

    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(config, drinks);
    let app = build_router(state, metrics_handle);

    run_http_server(app, http_addr).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, in-memory otherwise
async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn DrinkRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = roastery_db::create_pool(url).await?;
            tracing::info!("Database pool created");

            let repo = PgDrinkRepository::new(pool);
            if config.reset_database {
                repo.reset().await?;
            } else {
                repo.ensure_schema().await?;
            }
            Ok(Arc::new(repo))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, drinks are kept in memory");
            let repo = if config.reset_database {
                MemoryDrinkRepository::seeded()?
            } else {
                MemoryDrinkRepository::new()
            };
            Ok(Arc::new(repo))
        }
    }
}

async fn run_http_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn setup_metrics() -> anyhow::Result<PrometheusHandle> {
    // Storage round trips; anything past a second is an outage
    let latency_buckets = &[0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("drinks_operation_duration_seconds".to_string()),
            latency_buckets,
        )?
        .install_recorder()?;

    metrics::describe_histogram!(
        "drinks_operation_duration_seconds",
        "Drink operation latency in seconds by operation and result"
    );

    Ok(handle)
}

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
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
