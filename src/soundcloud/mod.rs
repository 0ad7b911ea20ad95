//! # SoundCloud Integration Module
//!
//! This module is the integration layer between the generator and the
//! SoundCloud API. It handles the three upstream calls a run makes, in
//! order, each stage feeding the next:
//!
//! ```text
//! CLI Layer
//!      ↓
//! SoundCloud Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── User Resolution (profile URL → numeric account id)
//!     └── Track Listing (up to 50 tracks per run)
//!      ↓
//! HTTP Layer (reqwest, JSON)
//!      ↓
//! SoundCloud API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials flow: a single POST
//! with a Basic-encoded `client_id:client_secret` header exchanging the
//! application credentials for a bearer token. There is no user consent
//! step, no refresh handling, and no token persistence: a run acquires one
//! token and uses it until the process exits.
//!
//! A success response without an `access_token` field is not an error.
//! Downstream requests then authenticate with the `client_id` query
//! parameter instead of the `Authorization: OAuth <token>` header, which
//! the public API accepts for read-only endpoints.
//!
//! ## User Resolution
//!
//! [`resolve`] maps a public profile name to the numeric account id via the
//! `/resolve` endpoint. This is the only stage allowed to fail without
//! killing the run: on any non-200 response the pipeline degrades to using
//! the raw username in the track-listing URL.
//!
//! ## Track Listing
//!
//! [`tracks`] fetches up to 50 tracks for the resolved account and returns
//! the raw, unvalidated JSON array. Validation happens later, during
//! normalization, so that the filter tiers can inspect fields the output
//! schema does not carry. [`tracks::fetch_tracks`] chains all three stages
//! and is the single entry point used by the CLI layer.
//!
//! ## Error Handling
//!
//! - Token endpoint non-success → [`RelistenError::Authentication`] with
//!   status and body, fatal.
//! - Track listing non-200 → [`RelistenError::Fetch`] with status and body,
//!   fatal.
//! - Resolve failure of any kind → logged warning, degraded lookup.
//!
//! There is no retry policy and no backoff: each endpoint is called exactly
//! once per run.
//!
//! [`RelistenError::Authentication`]: crate::error::RelistenError::Authentication
//! [`RelistenError::Fetch`]: crate::error::RelistenError::Fetch

pub mod auth;
pub mod resolve;
pub mod tracks;
