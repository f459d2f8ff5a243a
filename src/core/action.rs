//! # Actions
//!
//! Everything that can happen in MoodTune becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend responds? That's `Action::PlaylistReceived(response)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, error, info, warn};

use crate::backend::{PlaylistResponse, Song};
use crate::core::color::DEFAULT_MOOD_COLOR;
use crate::core::state::App;

pub const PLAYLIST_FAILED_ALERT: &str = "Something went wrong. Check backend.";
pub const SAVE_FAILED_ALERT: &str = "Failed to initiate Spotify save.";
pub const CREATE_FAILED_ALERT: &str = "Failed to create Spotify playlist.";
pub const LOADING_STATUS: &str = "Loading playlist...";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Input text changed.
    MoodChanged(String),
    /// Form submitted with the current mood.
    Submit,
    PlaylistReceived(PlaylistResponse),
    /// Playlist request failed; carries diagnostic detail for the log.
    PlaylistFailed(String),
    /// "Save to Spotify" pressed.
    Save,
    /// Save request answered with a login URL.
    SaveRedirect(String),
    SaveFailed(String),
    /// Create the playlist directly with the captured access token.
    CreatePlaylist,
    PlaylistCreated(String),
    CreateFailed(String),
    /// Open the known playlist link.
    OpenLink,
    DismissAlert,
    Quit,
}

/// I/O requested by `update()`, executed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchPlaylist { mood: String },
    SaveToService { songs: Vec<Song>, mood: String },
    CreatePlaylist { access_token: String, songs: Vec<Song>, mood: String },
    /// Leave the application and navigate to the URL.
    Redirect(String),
    /// Open the URL without leaving the application.
    OpenUrl(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::MoodChanged(text) => {
            app.mood = text;
            Effect::None
        }

        Action::Submit => {
            if app.mood.is_empty() {
                return Effect::None;
            }
            if app.is_loading {
                debug!("Submit ignored: playlist request already in flight");
                return Effect::None;
            }
            app.is_loading = true;
            app.spotify_link = None;
            app.status_message = LOADING_STATUS.to_string();
            info!("Submitting mood (len={})", app.mood.len());
            Effect::FetchPlaylist {
                mood: app.mood.clone(),
            }
        }

        Action::PlaylistReceived(response) => {
            app.playlist = response.playlist;
            app.mood_color = response
                .mood_color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_MOOD_COLOR.to_string());
            app.is_loading = false;
            app.status_message = format!("{} songs", app.playlist.len());
            debug!(
                "Playlist applied: {} songs, mood_color={}",
                app.playlist.len(),
                app.mood_color
            );
            Effect::None
        }

        Action::PlaylistFailed(detail) => {
            error!("API error: {}", detail);
            app.is_loading = false;
            app.status_message.clear();
            app.alert = Some(PLAYLIST_FAILED_ALERT.to_string());
            Effect::None
        }

        Action::Save => {
            if !app.can_save() {
                return Effect::None;
            }
            info!("Saving {} songs to service", app.playlist.len());
            Effect::SaveToService {
                songs: app.playlist.clone(),
                mood: app.mood.clone(),
            }
        }

        Action::SaveRedirect(login_url) => {
            info!("Redirecting to login");
            Effect::Redirect(login_url)
        }

        Action::SaveFailed(detail) => {
            error!("Save error: {}", detail);
            app.alert = Some(SAVE_FAILED_ALERT.to_string());
            Effect::None
        }

        Action::CreatePlaylist => {
            if !app.can_save() {
                return Effect::None;
            }
            let Some(access_token) = app.access_token.clone() else {
                warn!("Direct playlist creation requested without an access token");
                return Effect::None;
            };
            Effect::CreatePlaylist {
                access_token,
                songs: app.playlist.clone(),
                mood: app.mood.clone(),
            }
        }

        Action::PlaylistCreated(url) => {
            info!("Playlist created: {}", url);
            app.spotify_link = Some(url);
            Effect::None
        }

        Action::CreateFailed(detail) => {
            error!("Create playlist error: {}", detail);
            app.alert = Some(CREATE_FAILED_ALERT.to_string());
            Effect::None
        }

        Action::OpenLink => match &app.spotify_link {
            Some(url) => Effect::OpenUrl(url.clone()),
            None => Effect::None,
        },

        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
