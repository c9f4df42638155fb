use reqwest::Client;

use crate::{
    config::Config,
    errors::AuthError,
    spotify::{auth, playlist},
    types::{Credentials, FetchOutcome, Token},
};

/// Spotify Web API client for one export run.
///
/// Holds the HTTP client, the endpoints and, once acquired, the app token.
/// The token lives in memory for the lifetime of the client and is never
/// written anywhere.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
    credentials: Credentials,
    token: Option<Token>,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoints(
            Credentials {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
            },
            &config.api_url,
            &config.token_url,
        )
    }

    pub fn with_endpoints(credentials: Credentials, api_url: &str, token_url: &str) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url: token_url.to_string(),
            credentials,
            token: None,
        }
    }

    /// Requests a token and keeps it for subsequent calls.
    pub async fn authenticate(&mut self) -> Result<&Token, AuthError> {
        let token = auth::request_token(&self.http, &self.token_url, &self.credentials).await?;
        Ok(&*self.token.insert(token))
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Fetches every item of a playlist.
    ///
    /// Without a token, one acquisition is attempted first; if it fails no
    /// request is made and the error is returned instead of an outcome.
    pub async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<FetchOutcome, AuthError> {
        if self.token.is_none() {
            self.authenticate().await?;
        }
        let access_token = self
            .token
            .as_ref()
            .map(|t| t.access_token.clone())
            .unwrap_or_default();

        Ok(
            playlist::get_playlist_tracks(&self.http, &self.api_url, playlist_id, &access_token)
                .await,
        )
    }
}
