use tracing::{error, info};

use clubauth::{Config, Database, WebServer};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            if let Err(e) = config.apply_env_overrides() {
                eprintln!("Invalid environment override: {e}");
                std::process::exit(1);
            }
            config
        }
    };

    // Initialize logging
    if let Err(e) = clubauth::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        clubauth::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    info!("clubauth starting");

    let db = match Database::open(&config.database.path, config.database.max_connections).await {
        Ok(db) => db,
        Err(e) => {
            error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };
    info!("Connected to database at {}", config.database.path);

    let server = WebServer::from_database(&config.server, &db);
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        db.close().await;
        std::process::exit(1);
    }

    db.close().await;
}
