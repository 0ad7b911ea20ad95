use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    config,
    error::RelistenError,
    info,
    soundcloud::{auth, resolve},
    warning,
};

/// Page size of the track listing request. The profile this generator was
/// built for stays well under one page, so no pagination is implemented.
pub const TRACK_PAGE_SIZE: u32 = 50;

/// Fetches the raw track list for a profile.
///
/// Chains the full upstream sequence: token exchange, user resolution, and
/// the track-listing request. A failed resolve degrades to looking the
/// tracks up by the raw username; every other upstream failure is fatal.
///
/// Returns the unfiltered, unvalidated JSON array as delivered by the API.
pub async fn fetch_tracks(
    client_id: &str,
    client_secret: &str,
    username: &str,
) -> Result<Vec<Value>, RelistenError> {
    info!("Resolving user: {}", username);

    let token = auth::get_access_token(client_id, client_secret).await?;
    let access_token = token.access_token.as_deref();
    match (access_token, token.expires_in) {
        (Some(_), Some(expires_in)) => info!("Access token acquired (expires in {}s)", expires_in),
        (Some(_), None) => info!("Access token acquired"),
        (None, _) => warning!("Token endpoint returned no access token, using client_id auth"),
    }

    let account = match resolve_account(username, access_token, client_id).await {
        Some(id) => id,
        None => {
            warning!("User resolve failed, trying direct username approach");
            username.to_string()
        }
    };

    get_user_tracks(&account, access_token, client_id, TRACK_PAGE_SIZE).await
}

async fn resolve_account(
    username: &str,
    access_token: Option<&str>,
    client_id: &str,
) -> Option<String> {
    let id = resolve::resolve_user(username, access_token, client_id).await?;
    info!("Found user id: {}", id);
    Some(id.to_string())
}

/// Retrieves up to `limit` tracks of an account from the listing endpoint.
///
/// `account` is either the resolved numeric id or the raw username. Uses the
/// same auth scheme selection as the resolver: `OAuth` header when a token
/// exists, `client_id` query parameter otherwise.
///
/// # Returns
///
/// - `Ok(Vec<Value>)` with the raw track objects on HTTP 200.
/// - `Err(RelistenError::Fetch)` carrying status and body on anything else.
pub async fn get_user_tracks(
    account: &str,
    token: Option<&str>,
    client_id: &str,
    limit: u32,
) -> Result<Vec<Value>, RelistenError> {
    let api_url = match token {
        Some(_) => format!(
            "{api}/users/{account}/tracks?limit={limit}",
            api = &config::soundcloud_api_url(),
            account = account,
            limit = limit
        ),
        None => format!(
            "{api}/users/{account}/tracks?client_id={client_id}&limit={limit}",
            api = &config::soundcloud_api_url(),
            account = account,
            client_id = client_id,
            limit = limit
        ),
    };

    let client = Client::new();
    let mut request = client.get(&api_url);
    if let Some(token) = token {
        request = request.header("Authorization", format!("OAuth {token}"));
    }

    let response = request.send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(RelistenError::Fetch {
            status: status.as_u16(),
            body,
        });
    }

    let tracks: Vec<Value> = response.json().await?;
    info!("Total tracks returned: {}", tracks.len());
    log_first_track(&tracks);

    Ok(tracks)
}

// Filter-relevant fields of the first track, useful when a profile
// unexpectedly yields nothing after filtering.
fn log_first_track(tracks: &[Value]) {
    if let Some(first) = tracks.first() {
        info!(
            "First track: {} (streamable: {}, sharing: {}, policy: {}, state: {})",
            first["title"].as_str().unwrap_or("No title"),
            first["streamable"],
            first["sharing"],
            first["policy"],
            first["state"]
        );
    }
}
