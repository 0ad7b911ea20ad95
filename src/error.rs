use std::{fmt, io};

/// Failures the pipeline can hit, from token exchange to artifact writing.
///
/// Resolution failures are deliberately absent: a failed user resolve
/// degrades to username-based lookup instead of erroring. Everything in here
/// is fatal for the run.
#[derive(Debug)]
pub enum RelistenError {
    /// Non-success response from the token endpoint.
    Authentication { status: u16, body: String },
    /// Non-200 response from the track-listing endpoint.
    Fetch { status: u16, body: String },
    /// Fetch or filter yielded zero usable tracks.
    EmptyResult,
    /// A required track field was absent (or not of the expected type)
    /// during normalization.
    MissingField(String),
    Http(reqwest::Error),
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for RelistenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelistenError::Authentication { status, body } => {
                write!(f, "failed to get access token: {status}: {body}")
            }
            RelistenError::Fetch { status, body } => {
                write!(f, "failed to fetch tracks: {status}: {body}")
            }
            RelistenError::EmptyResult => write!(f, "no tracks found or API error occurred"),
            RelistenError::MissingField(field) => {
                write!(f, "track is missing required field '{field}'")
            }
            RelistenError::Http(err) => write!(f, "http error: {err}"),
            RelistenError::Io(err) => write!(f, "io error: {err}"),
            RelistenError::Serde(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for RelistenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelistenError::Http(err) => Some(err),
            RelistenError::Io(err) => Some(err),
            RelistenError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RelistenError {
    fn from(err: reqwest::Error) -> Self {
        RelistenError::Http(err)
    }
}

impl From<io::Error> for RelistenError {
    fn from(err: io::Error) -> Self {
        RelistenError::Io(err)
    }
}

impl From<serde_json::Error> for RelistenError {
    fn from(err: serde_json::Error) -> Self {
        RelistenError::Serde(err)
    }
}
