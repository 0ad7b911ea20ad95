//! Moafunk Re-Listen Generator Library
//!
//! This library fetches the track list of a SoundCloud profile and renders it
//! into a static artifact: either a JSON document for the site build, or a
//! complete HTML page with embedded track data and an inline player.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The pipeline error taxonomy
//! - `filter` - Tiered track selection policy
//! - `normalize` - Raw API record to output record mapping
//! - `render` - JSON and HTML artifact generation
//! - `soundcloud` - SoundCloud API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers for the summary output
//!
//! # Example
//!
//! ```
//! use relisten::{config, soundcloud};
//!
//! #[tokio::main]
//! async fn main() -> relisten::Res<()> {
//!     config::load_env().await?;
//!     let raw = soundcloud::tracks::fetch_tracks("id", "secret", "radio-moafunk").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod render;
pub mod soundcloud;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross async boundaries. The pipeline's own failures are represented by
/// [`error::RelistenError`], which converts into this alias transparently.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates throughout a run, e.g. resolve progress
/// and per-tier filter counts.
///
/// # Example
///
/// ```
/// info!("Resolving user: {}", username);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Generated {} with {} tracks", path, count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The run terminates with exit code 1 immediately after printing. Only used
/// for unrecoverable failures: a failed token exchange, a failed track fetch,
/// an empty result set, or an unwritable output path. There is no finer exit
/// code taxonomy than this.
///
/// # Example
///
/// ```
/// error!("Failed to fetch tracks: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice: a failed user
/// resolve (the run degrades to username-based lookup) or the unfiltered
/// debug fallback kicking in.
///
/// # Example
///
/// ```
/// warning!("User resolve failed, trying direct username approach");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
