//! Command-line interface definitions and parsing

use clap::{Parser, Subcommand};

use shared::ApplicationStatus;

#[derive(Parser)]
#[command(author, version, about = "Scholarship system API client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides INTERNAL_API_URL / NEXT_PUBLIC_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,
        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List scholarships
    Scholarships {
        /// Only those the signed-in student is eligible for
        #[arg(short, long)]
        eligible: bool,
    },
    /// List the signed-in student's applications
    Applications {
        /// Filter by status (e.g. draft, submitted, approved)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<ApplicationStatus>,
    },
    /// Show one application
    Application {
        /// Application id
        id: i64,
    },
    /// List notifications
    Notifications {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_ascii_lowercase())).map_err(|e| e.to_string())
}
