use relisten::render::{render_html, render_json, write_json};
use relisten::types::Track;

// Helper function to create a normalized track
fn normalized_track(id: u64, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        artwork_url: "https://example.com/artwork-t500x500.jpg".to_string(),
        created_at: "2025-01-01T12:00:00Z".to_string(),
        duration: 180000,
        permalink_url: "https://soundcloud.com/test".to_string(),
        stream_url: "#".to_string(),
        description: "A description...".to_string(),
    }
}

#[test]
fn test_render_json_is_pretty_array() {
    let tracks = vec![
        normalized_track(1, "First"),
        normalized_track(2, "Second"),
    ];

    let json = render_json(&tracks).unwrap();

    // Pretty-printed array with a trailing newline
    assert!(json.starts_with("[\n"));
    assert!(json.ends_with("\n"));
    assert!(json.contains("\"title\": \"First\""));
    assert!(json.contains("\"title\": \"Second\""));

    // Round-trips back into the same records
    let parsed: Vec<Track> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, tracks);
}

#[test]
fn test_render_json_preserves_non_ascii() {
    let tracks = vec![normalized_track(1, "Müsïc – Späti Session")];

    let json = render_json(&tracks).unwrap();

    // Non-ASCII characters stay literal, no \u escapes
    assert!(json.contains("Müsïc – Späti Session"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_render_html_embeds_tracks_and_timestamp() {
    let tracks = vec![normalized_track(42, "Embedded Track")];

    let html = render_html(&tracks, "2025-01-01 12:00").unwrap();

    // The track list lands inside the inline script as a JSON literal
    assert!(html.contains("const tracks = ["));
    assert!(html.contains("\"title\": \"Embedded Track\""));
    assert!(html.contains("\"id\": 42"));

    // Timestamp shows up in the footer line
    assert!(html.contains("Last updated: 2025-01-01 12:00"));

    // The page shell is complete: grid container, player footer, script
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("id=\"tracks-container\""));
    assert!(html.contains("id=\"player-footer\""));
    assert!(html.contains("</html>"));
}

#[test]
fn test_render_html_empty_list() {
    let html = render_html(&[], "2025-01-01 12:00").unwrap();

    // An empty list still renders a valid page; the script handles the
    // "No tracks found" case client-side
    assert!(html.contains("const tracks = []"));
}

#[tokio::test]
async fn test_write_json_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("public/data/tracks.json");
    let tracks = vec![normalized_track(1, "Written")];

    write_json(&tracks, &output).await.unwrap();

    // Missing parent directories were created along the way
    let contents = std::fs::read_to_string(&output).unwrap();
    let parsed: Vec<Track> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, tracks);
}
