use anyhow::{Context, Result};
use lexnet_server::config::{LoggingConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenv::dotenv().ok();

    // Logging first, so configuration warnings are visible
    lexnet_server::logging::init_logging(&LoggingConfig::load())
        .context("Failed to initialize logging")?;

    // Load configuration from environment variables
    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Run the server using the library's run function
    lexnet_server::run(config).await.context("Server error")?;

    Ok(())
}
