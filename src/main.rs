//! Notebin server — minimal note-sharing backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use notebin_core::config::AppConfig;
use notebin_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("NOTEBIN_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Notebin v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = notebin_database::connection::DatabasePool::connect(&config.database).await?;
    notebin_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(notebin_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let item_repo = Arc::new(notebin_database::repositories::ItemRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(notebin_auth::password::PasswordHasher::new());
    let revocation = Arc::new(notebin_auth::jwt::RevocationSet::new());
    let jwt_encoder = Arc::new(notebin_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(notebin_auth::jwt::JwtDecoder::new(
        &config.auth,
        Arc::clone(&revocation),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    let account_service = Arc::new(notebin_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let item_service = Arc::new(notebin_service::item::ItemService::new(
        Arc::clone(&item_repo),
        config.share.clone(),
    ));

    // ── Step 5: Start the expiration sweeper ─────────────────────
    let mut scheduler = if config.worker.enabled {
        let sweeper: Arc<dyn notebin_worker::ScheduledJob> =
            Arc::new(notebin_worker::jobs::ExpirationSweeper::new(
                Arc::clone(&item_repo),
                config.worker.sweep_schedule.clone(),
            ));

        let scheduler = notebin_worker::CronScheduler::new().await?;
        scheduler.register(sweeper).await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = notebin_api::state::AppState {
        config: Arc::new(config.clone()),
        jwt_encoder,
        jwt_decoder,
        account_service,
        item_service,
    };

    let app = notebin_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Notebin server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Notebin server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
