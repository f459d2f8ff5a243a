//! # Launch Parameters
//!
//! Values the client is started with, read once and never refreshed.
//! The only one today is the `access_token` query parameter that the
//! login callback appends to the URL it sends the user back to.
//!
//! Accepts a full URL (`https://host/?access_token=abc`) or just the query
//! part (`?access_token=abc` / `access_token=abc`).

use std::fmt;

use reqwest::Url;

/// Base used to resolve bare query strings into a parseable URL.
const QUERY_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub access_token: Option<String>,
}

#[derive(Debug)]
pub struct LaunchError(String);

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid launch URL: {}", self.0)
    }
}

impl std::error::Error for LaunchError {}

impl LaunchParams {
    /// Parses launch parameters out of a URL or query string.
    ///
    /// A missing or empty `access_token` leaves the token unset.
    pub fn from_url(input: &str) -> Result<Self, LaunchError> {
        let input = input.trim();
        let url = if input.contains("://") {
            Url::parse(input)
        } else {
            let query = input.strip_prefix('?').unwrap_or(input);
            Url::parse(&format!("{QUERY_BASE}?{query}"))
        }
        .map_err(|e| LaunchError(e.to_string()))?;

        let access_token = url
            .query_pairs()
            .find(|(key, _)| key == "access_token")
            .map(|(_, value)| value.into_owned())
            .filter(|token| !token.is_empty());

        Ok(Self { access_token })
    }

    /// Fills in a token from another source when the launch URL carried none.
    /// A token from the launch URL is never replaced.
    pub fn or_access_token(self, fallback: Option<String>) -> Self {
        Self {
            access_token: self
                .access_token
                .or(fallback.filter(|token| !token.is_empty())),
        }
    }
}
