//! # Backend Adapter
//!
//! Wire types and the HTTP client for the playlist service. Everything
//! that touches the network lives here; the core only sees `Song` and
//! `PlaylistResponse` values.

pub mod client;
pub mod types;

pub use client::{BackendError, DEFAULT_BACKEND_URL, HttpBackend, MoodBackend};
pub use types::{PlaylistResponse, Song};
