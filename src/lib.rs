//! FlexiRota: typed client for the FlexiRota shift-scheduling API.
//!
//! The core is [`client::ApiClient`], which attaches the stored access token
//! to every call and, on a 401, refreshes it once and resubmits. When the
//! session cannot be recovered it clears the stored tokens, redirects through
//! the injected [`auth::Navigator`], and returns the original failure.
//!
//! # Quick Start
//!
//! ```no_run
//! use flexirota::prelude::*;
//!
//! # async fn example() -> flexirota::error::Result<()> {
//! let client = ApiClient::from_env()?;
//! client.auth().login("sam", "hunter2").await?;
//! let pay = client.pay().estimate().await?;
//! println!("{:.2}", pay.current_month);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
