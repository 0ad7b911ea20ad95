use std::path::PathBuf;

use chrono::Local;

use crate::{
    error,
    normalize::{self, OutputTarget},
    render, success,
};

const DEFAULT_OUTPUT: &str = "re-listen.html";

/// Generates the complete re-listen page with embedded track data.
pub async fn html(
    client_id: String,
    client_secret: String,
    username: String,
    output: Option<PathBuf>,
    strict: bool,
) {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let selected = super::collect_tracks(&client_id, &client_secret, &username, strict).await;

    let tracks = match normalize::normalize_tracks(&selected, OutputTarget::Html) {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to normalize tracks: {}", e),
    };

    let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
    if let Err(e) = render::write_html(&tracks, &generated_at, &output).await {
        error!("Failed to write {}: {}", output.display(), e);
    }

    super::print_summary(&tracks);
    success!(
        "Generated {} with {} tracks",
        output.display(),
        tracks.len()
    );
}
