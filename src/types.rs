use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Response of the client-credentials token exchange.
///
/// `access_token` may legitimately be absent: the pipeline then falls back
/// to `client_id` query-parameter authentication instead of failing.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// A normalized track, the stable output schema of the pipeline.
///
/// Invariant: `artwork_url` and `stream_url` are always non-empty (defaults
/// applied during normalization). For the HTML target, `title` and
/// `description` are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artwork_url: String,
    pub created_at: String,
    pub duration: u64,
    pub permalink_url: String,
    pub stream_url: String,
    pub description: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub title: String,
    pub date: String,
    pub duration: String,
}
