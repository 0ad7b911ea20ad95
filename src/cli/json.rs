use std::path::PathBuf;

use crate::{
    error,
    normalize::{self, OutputTarget},
    render, success,
};

const DEFAULT_OUTPUT: &str = "public/data/tracks.json";

/// Generates the standalone JSON document for the site build.
pub async fn json(
    client_id: String,
    client_secret: String,
    username: String,
    output: Option<PathBuf>,
    strict: bool,
) {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let selected = super::collect_tracks(&client_id, &client_secret, &username, strict).await;

    let tracks = match normalize::normalize_tracks(&selected, OutputTarget::Json) {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to normalize tracks: {}", e),
    };

    if let Err(e) = render::write_json(&tracks, &output).await {
        error!("Failed to write {}: {}", output.display(), e);
    }

    super::print_summary(&tracks);
    success!(
        "Generated {} with {} tracks",
        output.display(),
        tracks.len()
    );
}
