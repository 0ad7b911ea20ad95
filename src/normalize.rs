//! Maps raw API track objects to the stable output schema.
//!
//! Both output modes share every rule in here; the [`OutputTarget`] decides
//! only the placeholder path and whether text fields are HTML-escaped.

use serde_json::Value;

use crate::{error::RelistenError, types::Track};

/// Descriptions are cut to this many characters before the ellipsis.
const DESCRIPTION_LIMIT: usize = 200;

/// Known low-resolution artwork suffixes and their 500x500 upgrade.
/// Exact substring replacement; no other variants are recognized.
const ARTWORK_UPGRADES: [(&str, &str); 3] = [
    ("-large.jpg", "-t500x500.jpg"),
    ("-crop.jpg", "-t500x500.jpg"),
    ("-t300x300.jpg", "-t500x500.jpg"),
];

/// Where the normalized list ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standalone JSON document, served from the site root.
    Json,
    /// JSON blob embedded into the generated page, served relative to it.
    Html,
}

impl OutputTarget {
    /// Local artwork fallback, relative to where the artifact is served from.
    pub fn placeholder(self) -> &'static str {
        match self {
            OutputTarget::Json => "/moafunk.png",
            OutputTarget::Html => "./moafunk.png",
        }
    }

    fn escapes_text(self) -> bool {
        matches!(self, OutputTarget::Html)
    }
}

/// Normalizes a filtered track list for the given target.
///
/// Fails the whole run with `RelistenError::MissingField` if any track lacks
/// one of the required fields (`id`, `title`, `created_at`, `duration`,
/// `permalink_url`); there is no per-track partial-failure tolerance.
pub fn normalize_tracks(tracks: &[Value], target: OutputTarget) -> Result<Vec<Track>, RelistenError> {
    tracks
        .iter()
        .map(|track| normalize_track(track, target))
        .collect()
}

fn normalize_track(track: &Value, target: OutputTarget) -> Result<Track, RelistenError> {
    let description = optional_str(track, "description").unwrap_or_default();

    Ok(Track {
        id: require_u64(track, "id")?,
        title: escape_for(target, require_str(track, "title")?),
        artwork_url: artwork_url(track, target),
        created_at: require_str(track, "created_at")?.to_string(),
        duration: require_u64(track, "duration")?,
        permalink_url: require_str(track, "permalink_url")?.to_string(),
        stream_url: optional_str(track, "stream_url").unwrap_or("#").to_string(),
        description: escape_for(target, &truncate_description(description)),
    })
}

fn require_u64(track: &Value, field: &str) -> Result<u64, RelistenError> {
    track
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| RelistenError::MissingField(field.to_string()))
}

fn require_str<'a>(track: &'a Value, field: &str) -> Result<&'a str, RelistenError> {
    track
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| RelistenError::MissingField(field.to_string()))
}

fn optional_str<'a>(track: &'a Value, field: &str) -> Option<&'a str> {
    track.get(field).and_then(Value::as_str)
}

fn artwork_url(track: &Value, target: OutputTarget) -> String {
    let raw = optional_str(track, "artwork_url").unwrap_or_default();
    if raw.is_empty() || raw == target.placeholder() {
        return target.placeholder().to_string();
    }

    let mut url = raw.to_string();
    for (from, to) in ARTWORK_UPGRADES {
        url = url.replace(from, to);
    }
    url
}

/// Cuts a description to its first [`DESCRIPTION_LIMIT`] characters and
/// appends `...`. An empty description stays exactly empty, no ellipsis.
pub fn truncate_description(description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }

    let truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{truncated}...")
}

/// Escapes the five HTML-special characters, `&` first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn escape_for(target: OutputTarget, text: &str) -> String {
    if target.escapes_text() {
        escape_html(text)
    } else {
        text.to_string()
    }
}
