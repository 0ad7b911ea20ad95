use relisten::error::RelistenError;
use relisten::normalize::{OutputTarget, escape_html, normalize_tracks, truncate_description};
use relisten::types::Track;
use serde_json::{Value, json};

// Helper function to create a complete raw track
fn raw_track(id: u64) -> Value {
    json!({
        "id": id,
        "title": "Test Track",
        "artwork_url": "https://example.com/artwork-large.jpg",
        "created_at": "2025-01-01T12:00:00Z",
        "duration": 180000,
        "permalink_url": "https://soundcloud.com/test",
        "stream_url": "https://soundcloud.com/stream",
        "description": "A description",
    })
}

fn normalize_one(track: Value, target: OutputTarget) -> Track {
    normalize_tracks(&[track], target)
        .unwrap()
        .into_iter()
        .next()
        .unwrap()
}

#[test]
fn test_artwork_suffixes_upgraded() {
    for suffix in ["-large.jpg", "-crop.jpg", "-t300x300.jpg"] {
        let mut track = raw_track(1);
        track["artwork_url"] = json!(format!("https://example.com/artwork{suffix}"));

        let normalized = normalize_one(track, OutputTarget::Json);

        // Every known low-resolution suffix becomes the 500x500 variant
        assert_eq!(
            normalized.artwork_url,
            "https://example.com/artwork-t500x500.jpg"
        );
    }
}

#[test]
fn test_unknown_artwork_suffix_untouched() {
    let mut track = raw_track(1);
    track["artwork_url"] = json!("https://example.com/artwork-t67x67.jpg");

    let normalized = normalize_one(track, OutputTarget::Json);

    // Only the three literal suffixes are recognized
    assert_eq!(
        normalized.artwork_url,
        "https://example.com/artwork-t67x67.jpg"
    );
}

#[test]
fn test_null_artwork_uses_placeholder() {
    let mut track = raw_track(456);
    track["artwork_url"] = json!(null);

    let normalized = normalize_one(track.clone(), OutputTarget::Json);
    assert_eq!(normalized.artwork_url, "/moafunk.png");

    // The HTML target uses the page-relative placeholder
    let normalized = normalize_one(track, OutputTarget::Html);
    assert_eq!(normalized.artwork_url, "./moafunk.png");
}

#[test]
fn test_absent_artwork_uses_placeholder() {
    let mut track = raw_track(1);
    track.as_object_mut().unwrap().remove("artwork_url");

    let normalized = normalize_one(track, OutputTarget::Json);

    assert_eq!(normalized.artwork_url, "/moafunk.png");
}

#[test]
fn test_long_description_truncated() {
    let mut track = raw_track(1);
    track["description"] = json!("A".repeat(250));

    let normalized = normalize_one(track, OutputTarget::Json);

    // 200 characters plus the ellipsis
    assert_eq!(normalized.description.chars().count(), 203);
    assert!(normalized.description.ends_with("..."));
}

#[test]
fn test_short_description_gets_ellipsis() {
    let mut track = raw_track(1);
    track["description"] = json!("short");

    let normalized = normalize_one(track, OutputTarget::Json);

    // Any non-empty description carries the ellipsis
    assert_eq!(normalized.description, "short...");
}

#[test]
fn test_empty_description_stays_empty() {
    let mut track = raw_track(789);
    track["description"] = json!("");

    let normalized = normalize_one(track, OutputTarget::Json);

    // Exactly empty, no ellipsis appended
    assert_eq!(normalized.description, "");
}

#[test]
fn test_missing_description_is_empty() {
    let mut track = raw_track(1);
    track.as_object_mut().unwrap().remove("description");
    let normalized = normalize_one(track, OutputTarget::Json);
    assert_eq!(normalized.description, "");

    let mut track = raw_track(1);
    track["description"] = json!(null);
    let normalized = normalize_one(track, OutputTarget::Json);
    assert_eq!(normalized.description, "");
}

#[test]
fn test_stream_url_defaults_to_hash() {
    let mut track = raw_track(1);
    track.as_object_mut().unwrap().remove("stream_url");
    let normalized = normalize_one(track, OutputTarget::Json);
    assert_eq!(normalized.stream_url, "#");

    let mut track = raw_track(1);
    track["stream_url"] = json!(null);
    let normalized = normalize_one(track, OutputTarget::Json);
    assert_eq!(normalized.stream_url, "#");
}

#[test]
fn test_missing_required_field_is_fatal() {
    let mut track = raw_track(1);
    track.as_object_mut().unwrap().remove("permalink_url");

    let result = normalize_tracks(&[track], OutputTarget::Json);

    // The whole run fails, naming the offending field
    match result {
        Err(RelistenError::MissingField(field)) => assert_eq!(field, "permalink_url"),
        other => panic!("expected MissingField error, got {other:?}"),
    }
}

#[test]
fn test_html_target_escapes_text() {
    let mut track = raw_track(1);
    track["title"] = json!(r#"R&B <Live> "Set""#);
    track["description"] = json!("a < b & c");

    let normalized = normalize_one(track.clone(), OutputTarget::Html);
    assert_eq!(normalized.title, "R&amp;B &lt;Live&gt; &quot;Set&quot;");
    assert_eq!(normalized.description, "a &lt; b &amp; c...");

    // The JSON target leaves the text as-is
    let normalized = normalize_one(track, OutputTarget::Json);
    assert_eq!(normalized.title, r#"R&B <Live> "Set""#);
    assert_eq!(normalized.description, "a < b & c...");
}

#[test]
fn test_reference_track() {
    let track = json!({
        "id": 123,
        "title": "Test Track",
        "artwork_url": "https://x/a-large.jpg",
        "created_at": "2025-01-01T12:00:00Z",
        "duration": 180000,
        "permalink_url": "https://soundcloud.com/test",
        "description": "A".repeat(250),
    });

    let tracks = normalize_tracks(&[track], OutputTarget::Json).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, 123);
    assert_eq!(tracks[0].title, "Test Track");
    assert!(tracks[0].artwork_url.contains("t500x500"));
    assert!(tracks[0].description.chars().count() <= 203);
}

#[test]
fn test_truncate_description() {
    // Empty stays empty
    assert_eq!(truncate_description(""), "");

    // Short input just gains the ellipsis
    assert_eq!(truncate_description("abc"), "abc...");

    // Long input is cut at 200 characters
    let long = "x".repeat(300);
    let truncated = truncate_description(&long);
    assert_eq!(truncated.chars().count(), 203);
    assert!(truncated.ends_with("..."));

    // Truncation counts characters, not bytes
    let umlauts = "ü".repeat(250);
    assert_eq!(truncate_description(&umlauts).chars().count(), 203);
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
    );

    // Ampersands are escaped first and exactly once
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}
