//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::backend::{BackendError, MoodBackend, PlaylistResponse, Song};
use crate::core::launch::LaunchParams;
use crate::core::state::App;

/// A backend for tests that don't need real API calls.
pub struct NoopBackend;

#[async_trait]
impl MoodBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate_playlist(&self, _mood: &str) -> Result<PlaylistResponse, BackendError> {
        Ok(PlaylistResponse {
            playlist: Vec::new(),
            mood_color: None,
        })
    }

    async fn save_to_service(&self, _songs: &[Song], _mood: &str) -> Result<String, BackendError> {
        Ok(String::new())
    }

    async fn create_playlist(
        &self,
        _access_token: &str,
        _songs: &[Song],
        _mood: &str,
    ) -> Result<String, BackendError> {
        Ok(String::new())
    }
}

/// Creates a test App with a NoopBackend and no launch parameters.
pub fn test_app() -> App {
    test_app_with(LaunchParams::default())
}

pub fn test_app_with(launch: LaunchParams) -> App {
    App::new(Arc::new(NoopBackend), launch)
}

pub fn song(title: &str, artist: &str) -> Song {
    Song {
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend_answers_empty() {
        let backend = NoopBackend;
        let response = tokio_test::block_on(backend.generate_playlist("happy")).unwrap();
        assert!(response.playlist.is_empty());
        assert_eq!(response.mood_color, None);

        let login_url = tokio_test::block_on(backend.save_to_service(&[song("A", "B")], "happy"));
        assert_eq!(login_url.unwrap(), "");
    }
}
