use relisten::types::Track;
use relisten::utils::*;

// Helper function to create a normalized track
fn create_test_track(id: u64, title: &str, created_at: &str, duration: u64) -> Track {
    Track {
        id,
        title: title.to_string(),
        artwork_url: "/moafunk.png".to_string(),
        created_at: created_at.to_string(),
        duration,
        permalink_url: "https://soundcloud.com/test".to_string(),
        stream_url: "#".to_string(),
        description: String::new(),
    }
}

#[test]
fn test_format_duration() {
    // Exact minutes
    assert_eq!(format_duration(180_000), "3:00");

    // Seconds are zero-padded
    assert_eq!(format_duration(61_000), "1:01");

    // Sub-second remainders are floored
    assert_eq!(format_duration(59_999), "0:59");

    // Zero duration
    assert_eq!(format_duration(0), "0:00");

    // Minutes are not capped at an hour, matching the page's player
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_created_at() {
    // UTC timestamp
    assert_eq!(format_created_at("2025-01-01T12:00:00Z"), "Jan 1, 2025");

    // Offset notation
    assert_eq!(
        format_created_at("2025-12-31T23:59:59+00:00"),
        "Dec 31, 2025"
    );

    // Unparseable input is passed through untouched
    assert_eq!(format_created_at("not a date"), "not a date");
    assert_eq!(format_created_at(""), "");
}

#[test]
fn test_track_table_rows() {
    let tracks = vec![
        create_test_track(1, "First Show", "2025-01-01T12:00:00Z", 180_000),
        create_test_track(2, "Second Show", "2025-02-15T20:30:00Z", 3_725_000),
    ];

    let rows = track_table_rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "First Show");
    assert_eq!(rows[0].date, "Jan 1, 2025");
    assert_eq!(rows[0].duration, "3:00");
    assert_eq!(rows[1].title, "Second Show");
    assert_eq!(rows[1].date, "Feb 15, 2025");
    assert_eq!(rows[1].duration, "62:05");
}
