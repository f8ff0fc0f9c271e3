use ut_config::Config;
use ut_db::ConnectionManager;
use ut_server::{AppState, ServerError, build_router, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ut-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and apply migrations
    let pool = ConnectionManager::new(config.database_path()?, config.database.max_connections)
        .connect()
        .await?;
    info!("Database connection established");

    let bind_addr = config.bind_addr();
    let app = build_router(AppState::new(pool.clone(), config));

    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
