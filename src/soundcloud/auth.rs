use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{config, error::RelistenError, types::Token};

/// Exchanges client credentials for an access token.
///
/// Sends a single POST to the token endpoint with the credentials encoded
/// into a Basic authorization header and a form-encoded
/// `grant_type=client_credentials` body.
///
/// # Returns
///
/// - `Ok(Token)` on a success status. `Token::access_token` is `None` when
///   the response body carries no `access_token` field; the caller then
///   falls back to `client_id` query-parameter authentication.
/// - `Err(RelistenError::Authentication)` carrying the status code and
///   response body on any non-success status.
/// - `Err(RelistenError::Http)` on network failures.
pub async fn get_access_token(
    client_id: &str,
    client_secret: &str,
) -> Result<Token, RelistenError> {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));

    let client = Client::new();
    let response = client
        .post(&config::soundcloud_token_url())
        .header("Authorization", format!("Basic {credentials}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelistenError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    let json: Value = response.json().await?;

    Ok(Token {
        access_token: json["access_token"].as_str().map(str::to_string),
        expires_in: json["expires_in"].as_u64(),
        scope: json["scope"].as_str().map(str::to_string),
    })
}
