use dotenvy::dotenv;

mod api;
mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Nutrition scanner entry point
///
/// Serves the scan page and its API, resolving barcodes locally and
/// delegating product lookups to the nutrition backend.
///
/// Layout:
/// - config/: Environment configuration (server, backend, CORS)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
/// - ui/: The HTML scan page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.backend)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
