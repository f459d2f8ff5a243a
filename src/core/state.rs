//! # Application State
//!
//! Core state for MoodTune. Domain data only; presentation state
//! (scroll offsets, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn MoodBackend>   // playlist service
//! ├── mood: String                    // current input text
//! ├── playlist: Vec<Song>             // last successful result
//! ├── mood_color: String              // background, "#RRGGBB"
//! ├── is_loading: bool                // playlist request in flight
//! ├── access_token: Option<String>    // captured at launch
//! ├── spotify_link: Option<String>    // known playlist link
//! ├── alert: Option<String>           // modal alert text
//! ├── status_message: String          // header status line
//! └── hex_parsing: HexParsing         // contrast parser choice
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::backend::{MoodBackend, Song};
use crate::core::color::{self, DEFAULT_MOOD_COLOR, HexParsing, TextColor};
use crate::core::launch::LaunchParams;

pub struct App {
    pub backend: Arc<dyn MoodBackend>,
    pub mood: String,
    pub playlist: Vec<Song>,
    pub mood_color: String,
    pub is_loading: bool,
    /// Captured once from the launch URL. Only the direct-create flow sends it.
    pub access_token: Option<String>,
    /// Cleared on every submission; set by the direct-create flow.
    pub spotify_link: Option<String>,
    pub alert: Option<String>,
    pub status_message: String,
    pub hex_parsing: HexParsing,
}

impl App {
    pub fn new(backend: Arc<dyn MoodBackend>, launch: LaunchParams) -> Self {
        Self {
            backend,
            mood: String::new(),
            playlist: Vec::new(),
            mood_color: DEFAULT_MOOD_COLOR.to_string(),
            is_loading: false,
            access_token: launch.access_token,
            spotify_link: None,
            alert: None,
            status_message: String::new(),
            hex_parsing: HexParsing::default(),
        }
    }

    pub fn with_hex_parsing(mut self, hex_parsing: HexParsing) -> Self {
        self.hex_parsing = hex_parsing;
        self
    }

    /// Readable text color over the current mood color.
    pub fn text_color(&self) -> TextColor {
        color::text_color_with(&self.mood_color, self.hex_parsing.parser())
    }

    pub fn has_playlist(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// Save is offered once there is a playlist and no link to it yet.
    pub fn can_save(&self) -> bool {
        self.has_playlist() && self.spotify_link.is_none()
    }

    pub fn can_create_directly(&self) -> bool {
        self.can_save() && self.access_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::launch::LaunchParams;
    use crate::test_support::{song, test_app, test_app_with};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.mood.is_empty());
        assert!(app.playlist.is_empty());
        assert_eq!(app.mood_color, "#E5E7EB");
        assert!(!app.is_loading);
        assert!(app.access_token.is_none());
        assert!(app.spotify_link.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_access_token_captured_at_construction() {
        let launch = LaunchParams::from_url("https://x/?access_token=abc").unwrap();
        let app = test_app_with(launch);
        assert_eq!(app.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_can_save_requires_playlist_and_no_link() {
        let mut app = test_app();
        assert!(!app.can_save());

        app.playlist = vec![song("A", "B")];
        assert!(app.can_save());
        assert!(!app.can_create_directly());

        app.spotify_link = Some("https://open.spotify.com/playlist/x".to_string());
        assert!(!app.can_save());
    }

    #[test]
    fn test_text_color_follows_mood_color() {
        use crate::core::color::TextColor;
        let mut app = test_app();
        assert_eq!(app.text_color(), TextColor::Black);
        app.mood_color = "#123456".to_string();
        assert_eq!(app.text_color(), TextColor::White);
    }
}
