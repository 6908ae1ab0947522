//! CLI entry point for FlexiRota.

pub mod auth;
pub mod rota;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::auth::FileSessionStore;
use crate::client::ApiClient;
use crate::config::ClientConfig;

/// FlexiRota CLI
#[derive(Parser, Debug)]
#[command(name = "flexirota", version, about = "FlexiRota shift-scheduling CLI")]
pub struct Cli {
    /// Backend base URL (overrides FLEXIROTA_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session management
    Auth(AuthArgs),
    /// Show the signed-in user
    Me,
    /// Show this month's pay estimate
    Pay,
    /// Manage availability slots
    Availability(AvailabilityArgs),
    /// Review shift swap requests
    Swaps(SwapsArgs),
    /// Show fairness analytics (managers)
    Fairness,
    /// List unread notifications
    Notifications,
}

/// Arguments for the `auth` subcommand group.
#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

/// Auth subcommands for login, status, and logout.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in with username and password
    Login(LoginArgs),
    /// Show whether a session is stored
    Status,
    /// Sign out and forget stored tokens
    Logout,
}

/// Arguments for `flexirota auth login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    pub username: String,
    /// Password (prompted on stdin when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AvailabilityArgs {
    #[command(subcommand)]
    pub command: AvailabilityCommands,
}

#[derive(Subcommand, Debug)]
pub enum AvailabilityCommands {
    /// List slots
    List,
    /// Add a slot (RFC 3339 timestamps)
    Add {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Remove a slot by id
    Remove { id: i64 },
}

#[derive(Parser, Debug)]
pub struct SwapsArgs {
    #[command(subcommand)]
    pub command: SwapsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SwapsCommands {
    /// List pending requests
    Pending,
    /// Approve a request
    Approve { id: i64 },
    /// Reject a request
    Reject { id: i64 },
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Build a client that persists its session under `~/.flexirota`.
pub fn build_client(base_url: Option<String>) -> crate::error::Result<ApiClient> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    ApiClient::new(
        config,
        Arc::new(FileSessionStore::new_default()),
        Arc::new(|_: &str| {
            eprintln!("Session expired. Run `flexirota auth login <username>` to sign in again.");
        }),
    )
}
