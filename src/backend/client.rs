//! HTTP client for the MoodTune backend.
//!
//! Three endpoints, all `POST` with JSON bodies:
//! - `/playlist`: mood text in, songs and a mood color out
//! - `/save_to_spotify`: songs and mood in, a login URL out
//! - `/spotify_playlist`: access token, songs and mood in, a playlist URL out

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CreatePlaylistRequest, CreatePlaylistResponse, PlaylistRequest, PlaylistResponse,
    SaveRequest, SaveResponse, Song,
};

pub const DEFAULT_BACKEND_URL: &str = "https://moodtune-l8t8.onrender.com";

/// Errors from a backend call.
///
/// The user only ever sees a generic alert per flow; the variants exist
/// so the log says what actually went wrong.
#[derive(Debug)]
pub enum BackendError {
    /// Client could not be built (TLS backend, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not the JSON shape we expected.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Config(msg) => write!(f, "config error: {msg}"),
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

#[async_trait]
pub trait MoodBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Asks for a playlist matching `mood`.
    async fn generate_playlist(&self, mood: &str) -> Result<PlaylistResponse, BackendError>;

    /// Hands the playlist over for saving and returns the login URL to redirect to.
    async fn save_to_service(&self, songs: &[Song], mood: &str) -> Result<String, BackendError>;

    /// Creates the playlist directly with an access token and returns its URL.
    async fn create_playlist(
        &self,
        access_token: &str,
        songs: &[Song],
        mood: &str,
    ) -> Result<String, BackendError>;
}

/// reqwest-backed implementation.
///
/// Only the save and direct-create calls are credentialed: they share a
/// cookie store, so the save request travels with whatever session cookies
/// the backend set. `/playlist` goes through a plain client that neither
/// sends nor keeps cookies.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
    credentialed: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;
        let credentialed = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self {
            base_url,
            client,
            credentialed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, R>(
        &self,
        client: &reqwest::Client,
        path: &str,
        body: &B,
    ) -> Result<R, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        debug!("POST {} -> {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend error on {}: {} - {}", path, status, err_body);
            return Err(BackendError::Api {
                status,
                message: err_body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        debug!("Response body from {}: {}", path, text);

        serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MoodBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate_playlist(&self, mood: &str) -> Result<PlaylistResponse, BackendError> {
        info!("Requesting playlist (mood_len={})", mood.len());
        let response: PlaylistResponse = self
            .post_json(&self.client, "/playlist", &PlaylistRequest { text: mood })
            .await?;
        info!(
            "Playlist received: {} songs, mood_color={:?}",
            response.playlist.len(),
            response.mood_color
        );
        Ok(response)
    }

    async fn save_to_service(&self, songs: &[Song], mood: &str) -> Result<String, BackendError> {
        info!("Initiating save for {} songs", songs.len());
        let response: SaveResponse = self
            .post_json(
                &self.credentialed,
                "/save_to_spotify",
                &SaveRequest { songs, mood },
            )
            .await?;
        Ok(response.login_url)
    }

    async fn create_playlist(
        &self,
        access_token: &str,
        songs: &[Song],
        mood: &str,
    ) -> Result<String, BackendError> {
        info!("Creating playlist directly for {} songs", songs.len());
        let request = CreatePlaylistRequest {
            access_token,
            songs,
            mood,
        };
        let response: CreatePlaylistResponse = self
            .post_json(&self.credentialed, "/spotify_playlist", &request)
            .await?;
        Ok(response.playlist_url)
    }
}
