use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{config, warning};

/// Resolves a profile name to the numeric account id.
///
/// Issues one GET against the `/resolve` endpoint for the profile URL built
/// from `username`. Authenticates with the `Authorization: OAuth <token>`
/// header when a token is available, otherwise with a `client_id` query
/// parameter.
///
/// This stage never fails the run: any non-200 status, network error, or a
/// body without a numeric `id` logs a warning and returns `None`, and the
/// caller degrades to a username-based track lookup.
pub async fn resolve_user(username: &str, token: Option<&str>, client_id: &str) -> Option<u64> {
    let api_url = format!(
        "{api}/resolve?url={web}/{username}",
        api = &config::soundcloud_api_url(),
        web = &config::soundcloud_web_url(),
        username = username
    );

    let client = Client::new();
    let request = match token {
        Some(token) => client
            .get(&api_url)
            .header("Authorization", format!("OAuth {token}")),
        None => client.get(format!("{api_url}&client_id={client_id}")),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            warning!("User resolve request failed: {}", err);
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        warning!("User resolve failed with status {}", response.status());
        return None;
    }

    let user: Value = match response.json().await {
        Ok(json) => json,
        Err(err) => {
            warning!("Cannot parse resolve response: {}", err);
            return None;
        }
    };

    user["id"].as_u64()
}
