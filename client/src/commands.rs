//! Command handlers for the `scholarship` CLI

use serde::Serialize;
use shared::{ApiResponse, ScholarshipFilter};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::core::error::ApiResult;
use crate::services::api::{applications, auth, notifications, scholarships, ApiClient};

/// Command dispatcher for handling CLI commands
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Execute a CLI command
    pub async fn execute(cli: Cli, client: &ApiClient) -> ApiResult<()> {
        match cli.command {
            Commands::Login { username, password } => Self::handle_login(client, &username, &password).await,
            Commands::Logout => {
                auth::logout(client);
                println!("Logged out");
                Ok(())
            }
            Commands::Whoami => print_envelope(&auth::get_current_user(client).await?),
            Commands::Scholarships { eligible } => {
                if eligible {
                    print_envelope(&scholarships::get_eligible(client).await?)
                } else {
                    print_envelope(&scholarships::get_all(client, &ScholarshipFilter::default()).await?)
                }
            }
            Commands::Applications { status } => {
                print_envelope(&applications::get_my_applications(client, status.as_ref()).await?)
            }
            Commands::Application { id } => print_envelope(&applications::get_by_id(client, id).await?),
            Commands::Notifications { unread } => print_envelope(&notifications::get_all(client, unread, None).await?),
        }
    }

    async fn handle_login(client: &ApiClient, username: &str, password: &str) -> ApiResult<()> {
        let response = auth::login(client, username, password).await?;
        if !response.success || !client.tokens().has_token() {
            return print_envelope(&response);
        }

        match response.data.as_ref().and_then(|token| token.user.as_ref()) {
            Some(user) => println!("Logged in as {} ({})", user.name, user.role),
            None => println!("Logged in"),
        }
        info!(username, "Session token stored");
        Ok(())
    }
}

/// Print the payload as pretty JSON, or the message when there is none.
///
/// Business failures (`success: false`) go to stderr along with any errors.
fn print_envelope<T: Serialize>(response: &ApiResponse<T>) -> ApiResult<()> {
    if !response.success {
        eprintln!("Request failed: {}", response.message);
        for error in response.errors.iter().flatten() {
            eprintln!("  - {error}");
        }
    }

    match &response.data {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("{}", response.message),
    }
    Ok(())
}
