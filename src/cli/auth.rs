//! CLI auth command handlers for login, status, and logout.

use std::io::Write;

use crate::auth::AccessClaims;
use crate::client::ApiClient;

/// Handle `flexirota auth login <username>`.
pub async fn handle_login(
    client: &ApiClient,
    username: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = match password {
        Some(p) => p,
        None => {
            print!("Password: ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        return Err("No password provided.".into());
    }

    client
        .auth()
        .login(username, &password)
        .await
        .map_err(|err| format!("Login failed: {}", err.user_message()))?;
    let me = client.users().me().await?;
    println!("Signed in as {} ({})", me.display_name(), me.role);
    Ok(())
}

/// Handle `flexirota auth status`.
pub async fn handle_status(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let session = client.session()?;
    println!("Backend: {}", client.config().base_url);

    match session.access_token() {
        Some(access) => {
            let expiry = AccessClaims::decode(access)
                .and_then(|claims| claims.expires_at())
                .map(|exp| {
                    if exp > chrono::Utc::now() {
                        format!(" (access token expires {})", exp.format("%Y-%m-%d %H:%M"))
                    } else {
                        " (access token expired; will refresh on next call)".to_string()
                    }
                })
                .unwrap_or_default();
            println!("Session: signed in{expiry}");
        }
        None => println!("Session: not signed in"),
    }
    if session.refresh_token().is_none() {
        println!("Refresh token: none");
    }
    Ok(())
}

/// Handle `flexirota auth logout`.
pub async fn handle_logout(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    client.auth().logout().await?;
    println!("Signed out.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::auth::{LogNavigator, MemorySessionStore};
    use crate::config::ClientConfig;

    fn offline_client() -> ApiClient {
        ApiClient::new(
            ClientConfig::default()
                .with_base_url("http://127.0.0.1:9")
                .with_send_cookies(false),
            Arc::new(MemorySessionStore::new()),
            Arc::new(LogNavigator),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn empty_password_is_an_error() {
        let err = handle_login(&offline_client(), "sam", Some(String::new()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No password provided.");
    }

    #[tokio::test]
    async fn failed_login_is_returned_to_caller() {
        let err = handle_login(&offline_client(), "sam", Some("pw".into()))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Login failed: "));
    }
}
