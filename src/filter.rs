use serde_json::Value;

use crate::{info, warning};

/// How many tracks the unfiltered debug fallback hands back.
pub const DEBUG_FALLBACK_LIMIT: usize = 10;

/// Selects the tracks worth publishing from the raw listing.
///
/// Tiers, applied in order, first non-empty result wins:
///
/// 1. tracks whose `streamable` flag is true;
/// 2. tracks whose `sharing` is `"public"`;
/// 3. the first [`DEBUG_FALLBACK_LIMIT`] tracks, unfiltered.
///
/// Tier 3 is a debug escape valve, not production behavior: it can hand back
/// tracks that cannot actually be played. It is always announced with a
/// warning, and `strict` disables it entirely, in which case an input where
/// tiers 1 and 2 come up empty yields an empty result.
pub fn select_tracks(tracks: &[Value], strict: bool) -> Vec<Value> {
    let streamable: Vec<Value> = tracks
        .iter()
        .filter(|track| track["streamable"].as_bool().unwrap_or(false))
        .cloned()
        .collect();
    info!("Streamable tracks: {}", streamable.len());
    if !streamable.is_empty() {
        return streamable;
    }

    let public: Vec<Value> = tracks
        .iter()
        .filter(|track| track["sharing"].as_str() == Some("public"))
        .cloned()
        .collect();
    info!("Public tracks: {}", public.len());
    if !public.is_empty() {
        return public;
    }

    if strict {
        warning!("No tracks passed filters");
        return Vec::new();
    }

    warning!(
        "No tracks passed filters, returning first {} for debugging",
        DEBUG_FALLBACK_LIMIT
    );
    tracks.iter().take(DEBUG_FALLBACK_LIMIT).cloned().collect()
}
