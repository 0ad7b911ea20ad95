//! Configuration management for the re-listen generator.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. Credentials are passed
//! on the command line; what lives here are the upstream endpoint URLs, each
//! with the public SoundCloud default baked in.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in upstream defaults

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `relisten/.env` in the platform-specific local
/// data directory. The file is optional: every value this module exposes has
/// a default, so a missing `.env` is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/relisten/.env`
/// - macOS: `~/Library/Application Support/relisten/.env`
/// - Windows: `%LOCALAPPDATA%/relisten/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("relisten/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the SoundCloud API base URL.
///
/// Reads `SOUNDCLOUD_API_URL`, falling back to the public API host. Used for
/// the resolve and track-listing endpoints.
pub fn soundcloud_api_url() -> String {
    env::var("SOUNDCLOUD_API_URL").unwrap_or_else(|_| "https://api.soundcloud.com".to_string())
}

/// Returns the OAuth2 token endpoint URL.
///
/// Reads `SOUNDCLOUD_TOKEN_URL`, falling back to the current upstream token
/// endpoint. The legacy `api.soundcloud.com/oauth2/token` endpoint is
/// deprecated but can still be selected through the variable.
pub fn soundcloud_token_url() -> String {
    env::var("SOUNDCLOUD_TOKEN_URL")
        .unwrap_or_else(|_| "https://secure.soundcloud.com/oauth/token".to_string())
}

/// Returns the public web URL used to build profile URLs for the resolver.
///
/// Reads `SOUNDCLOUD_WEB_URL`, falling back to `https://soundcloud.com`.
pub fn soundcloud_web_url() -> String {
    env::var("SOUNDCLOUD_WEB_URL").unwrap_or_else(|_| "https://soundcloud.com".to_string())
}
