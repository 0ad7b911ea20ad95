use relisten::filter::{DEBUG_FALLBACK_LIMIT, select_tracks};
use serde_json::{Value, json};

// Helper function to create a raw track with the filter-relevant fields
fn raw_track(id: u64, streamable: bool, sharing: &str) -> Value {
    json!({
        "id": id,
        "streamable": streamable,
        "sharing": sharing,
    })
}

fn ids(tracks: &[Value]) -> Vec<u64> {
    tracks.iter().map(|t| t["id"].as_u64().unwrap()).collect()
}

#[test]
fn test_streamable_tier_wins() {
    let tracks = vec![
        raw_track(1, true, "private"),
        raw_track(2, false, "public"),
        raw_track(3, true, "public"),
    ];

    let selected = select_tracks(&tracks, false);

    // Only the streamable tracks survive, public-but-unstreamable does not
    assert_eq!(ids(&selected), vec![1, 3]);
}

#[test]
fn test_public_tier_when_no_streamable() {
    let tracks = vec![
        raw_track(1, false, "private"),
        raw_track(2, false, "public"),
        raw_track(3, false, "public"),
    ];

    let selected = select_tracks(&tracks, false);

    // Exactly the public subset, never the raw-10 debug fallback
    assert_eq!(ids(&selected), vec![2, 3]);
}

#[test]
fn test_missing_flags_are_not_streamable() {
    // A track without streamable/sharing fields passes neither tier
    let tracks = vec![json!({"id": 1}), raw_track(2, true, "private")];

    let selected = select_tracks(&tracks, false);

    assert_eq!(ids(&selected), vec![2]);
}

#[test]
fn test_debug_fallback_returns_first_ten() {
    let tracks: Vec<Value> = (1..=15).map(|id| raw_track(id, false, "private")).collect();

    let selected = select_tracks(&tracks, false);

    // Nothing passed the filters, so the first 10 come back unfiltered
    assert_eq!(selected.len(), DEBUG_FALLBACK_LIMIT);
    assert_eq!(ids(&selected), (1..=10).collect::<Vec<u64>>());
}

#[test]
fn test_strict_disables_debug_fallback() {
    let tracks: Vec<Value> = (1..=15).map(|id| raw_track(id, false, "private")).collect();

    let selected = select_tracks(&tracks, true);

    // Strict mode yields nothing instead of unstreamable tracks
    assert!(selected.is_empty());
}

#[test]
fn test_empty_input_stays_empty() {
    assert!(select_tracks(&[], false).is_empty());
    assert!(select_tracks(&[], true).is_empty());
}
