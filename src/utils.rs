use chrono::DateTime;

use crate::types::{Track, TrackTableRow};

/// Formats a millisecond duration as `m:ss`, the same shape the generated
/// page uses for its tiles.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{minutes}:{seconds:02}")
}

/// Formats an ISO-8601 timestamp as e.g. `Jan 1, 2025`.
///
/// Unparseable input is passed through untouched; the summary table is
/// diagnostic output and not worth failing a run over.
pub fn format_created_at(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => created_at.to_string(),
    }
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|track| TrackTableRow {
            title: track.title.clone(),
            date: format_created_at(&track.created_at),
            duration: format_duration(track.duration),
        })
        .collect()
}
