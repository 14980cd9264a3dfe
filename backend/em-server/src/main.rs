use em_server::{AppState, ServerError, ServerResult, build_router, logger, metrics};

use em_config::Config;
use em_db::{Database, DatabaseOptions};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Local overrides for EM_* variables
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting em-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = Database::open(
        &DatabaseOptions::new(database_path).with_max_connections(config.database.max_connections),
    )
    .await?;

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator = AppState::validator_from_config(&config.auth, &Config::config_dir()?)?;

    // Build application state
    let mut app_state = AppState::new(pool, jwt_validator, &config.auth, &config.site);
    if config.site.metrics_enabled {
        app_state = app_state.with_metrics(metrics::install_recorder()?);
    }
    let shutdown = app_state.shutdown.clone();

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;
    info!("Server listening on {}", bind_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await
        .map_err(|e| ServerError::Serve { source: e })?;

    Ok(())
}
