use serde::{Deserialize, Serialize};

/// A song suggested by the backend. Only ever deserialized, never built by the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

/// Body of `POST /playlist`.
#[derive(Serialize, Debug)]
pub struct PlaylistRequest<'a> {
    pub text: &'a str,
}

/// Response of `POST /playlist`.
///
/// `playlist` is required: a body without it fails to deserialize.
/// `mood_color` may be absent or empty; the caller substitutes the default.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PlaylistResponse {
    pub playlist: Vec<Song>,
    #[serde(default)]
    pub mood_color: Option<String>,
}

/// Body of `POST /save_to_spotify`.
#[derive(Serialize, Debug)]
pub struct SaveRequest<'a> {
    pub songs: &'a [Song],
    pub mood: &'a str,
}

/// Response of `POST /save_to_spotify`.
#[derive(Deserialize, Debug)]
pub struct SaveResponse {
    pub login_url: String,
}

/// Body of `POST /spotify_playlist`.
#[derive(Serialize, Debug)]
pub struct CreatePlaylistRequest<'a> {
    pub access_token: &'a str,
    pub songs: &'a [Song],
    pub mood: &'a str,
}

/// Response of `POST /spotify_playlist`.
#[derive(Deserialize, Debug)]
pub struct CreatePlaylistResponse {
    pub playlist_url: String,
}
