//! # CLI Module
//!
//! User-facing command implementations. Each command runs the same linear
//! pipeline — fetch, filter, normalize, write — and differs only in the
//! output target and default path:
//!
//! - [`json`] - writes the normalized list as a standalone JSON document
//! - [`html`] - writes the complete re-listen page with embedded track data
//!
//! Both commands show a spinner during the network phase, terminate through
//! the `error!` macro on any fatal pipeline error (exit code 1, no finer
//! taxonomy), and finish with a table of the generated tracks plus a
//! success line naming the artifact.
//!
//! The tier-3 filter fallback (first ten tracks, unfiltered) is debug
//! behavior; both commands expose `--strict` to opt out of it, turning an
//! empty filter result into a fatal error instead.

mod html;
mod json;

pub use html::html;
pub use json::json;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tabled::Table;

use crate::{error, filter, soundcloud, types::Track, utils};

/// Runs the network phase under a spinner and applies the filter tiers.
/// Fatal on fetch errors and on an empty selection.
pub(crate) async fn collect_tracks(
    client_id: &str,
    client_secret: &str,
    username: &str,
    strict: bool,
) -> Vec<Value> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching tracks from SoundCloud user: {username}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let raw = match soundcloud::tracks::fetch_tracks(client_id, client_secret, username).await {
        Ok(raw) => raw,
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };
    pb.finish_and_clear();

    let selected = filter::select_tracks(&raw, strict);
    if selected.is_empty() {
        error!("{}", error::RelistenError::EmptyResult);
    }

    selected
}

pub(crate) fn print_summary(tracks: &[Track]) {
    let rows = utils::track_table_rows(tracks);
    let table = Table::new(rows);
    println!("{table}");
}
