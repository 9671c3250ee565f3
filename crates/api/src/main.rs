use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skillreel_api::config::ServerConfig;
use skillreel_api::engine::ScoringEngine;
use skillreel_api::router::build_app_router;
use skillreel_api::state::AppState;
use skillreel_storage::{StorageClient, StorageConfig};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skillreel_api=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Configuration loaded");

    // Database: connect, verify, migrate. Any failure here aborts startup.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = skillreel_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    if !skillreel_db::health_check(&pool).await {
        panic!("Database health check failed");
    }
    skillreel_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    let storage_config = StorageConfig::from_env();
    let storage = StorageClient::new(&storage_config).await;
    tracing::info!(bucket = %storage_config.bucket, "Storage client ready");

    // The scoring engine runs for the lifetime of the server and is wound
    // down after the listener stops.
    let engine_cancel = tokio_util::sync::CancellationToken::new();
    let engine = ScoringEngine::new(pool.clone(), config.scoring.clone());
    let engine_handle = tokio::spawn({
        let cancel = engine_cancel.clone();
        async move { engine.run(cancel).await }
    });

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Listener closed, winding down background work");
    engine_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), engine_handle).await;
    tracing::info!("Graceful shutdown complete");
}

/// Resolve when the process is told to stop: SIGINT (Ctrl-C) anywhere,
/// SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
