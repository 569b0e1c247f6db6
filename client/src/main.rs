//! `scholarship` - command-line client for the scholarship backend

use clap::Parser;
use tracing::error;

use scholarship_client::{
    cli::Cli,
    commands::CommandDispatcher,
    config::ApiConfig,
    debug::{init_logger, DebugConfig},
    ApiClient,
};

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut debug_config = DebugConfig::from_env();
    if cli.verbose {
        debug_config = debug_config.verbose();
    }
    let _log_guard = init_logger(&debug_config);

    let mut config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    if let Some(base_url) = &cli.base_url {
        config = ApiConfig {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            ..config
        };
    }

    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = CommandDispatcher::execute(cli, &client).await {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
