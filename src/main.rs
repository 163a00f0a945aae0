use std::process::ExitCode;

use tracing::{error, info, warn};

use proprompter::script::ScriptRepository;
use proprompter::web::WebServer;
use proprompter::{Config, Database};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables take precedence
    let _ = dotenvy::dotenv();

    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // Initialize logging
    if let Err(e) = proprompter::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        proprompter::logging::init_console_only(&config.logging.level);
    }

    info!("ProPrompter API");

    let db = match Database::open(&config.database) {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The API still starts when the store is down; requests report it.
    match db.ensure_schema().await {
        Ok(()) => log_script_count(&db).await,
        Err(e) => error!("Failed to create schema, continuing without it: {e}"),
    }

    let server = match WebServer::new(&config, db.clone()) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = server.run().await;
    db.close().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Web server error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn log_script_count(db: &Database) {
    let count = match db.acquire().await {
        Ok(mut session) => ScriptRepository::new(&mut session).count().await,
        Err(e) => Err(e),
    };
    match count {
        Ok(count) => info!(scripts = count, "Database ready"),
        Err(e) => warn!("Failed to count stored scripts: {e}"),
    }
}
