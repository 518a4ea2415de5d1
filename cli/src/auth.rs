//! Spotify authorization-code flow with a cached, refreshable token.

use crate::service::ServiceError;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SCOPE: &str = "user-follow-read";
// Tokens count as expired this long before Spotify's deadline.
const EXPIRY_MARGIN_SECONDS: u64 = 60;

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        current_timestamp() + EXPIRY_MARGIN_SECONDS >= self.expires_at
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
    refresh_token: Option<String>,
}

pub struct Authenticator {
    http: Client,
    config: OAuthConfig,
    token_path: PathBuf,
}

impl Authenticator {
    pub fn new(http: Client, config: OAuthConfig, token_path: PathBuf) -> Self {
        Self {
            http,
            config,
            token_path,
        }
    }

    /// Returns a usable token: cached, refreshed, or obtained from the user.
    pub fn obtain_token(&self) -> Result<Token, ServiceError> {
        if let Some(cached) = self.load_cached() {
            if !cached.is_expired() {
                return Ok(cached);
            }
            match self.refresh(&cached) {
                Ok(token) => return Ok(token),
                Err(e) => tracing::warn!(error = %e, "token refresh failed, authorizing again"),
            }
        }

        self.authorize_interactively()
    }

    pub fn refresh(&self, token: &Token) -> Result<Token, ServiceError> {
        let refresh_token = token
            .refresh_token
            .as_deref()
            .ok_or_else(|| ServiceError::Auth("no refresh token available".to_string()))?;

        let mut refreshed = self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])?;
        // Spotify may omit the refresh token when it stays the same.
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = token.refresh_token.clone();
        }

        self.save(&refreshed);
        tracing::info!("access token refreshed");
        Ok(refreshed)
    }

    pub fn authorize_url(&self) -> Result<Url, ServiceError> {
        Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", SCOPE),
            ],
        )
        .map_err(|e| ServiceError::Auth(e.to_string()))
    }

    fn authorize_interactively(&self) -> Result<Token, ServiceError> {
        println!("🔑 Open this URL in your browser and authorize the application:\n");
        println!("{}\n", self.authorize_url()?);
        print!("Paste the URL you were redirected to: ");
        io::stdout().flush().map_err(|e| ServiceError::Auth(e.to_string()))?;

        let mut redirected = String::new();
        io::stdin()
            .lock()
            .read_line(&mut redirected)
            .map_err(|e| ServiceError::Auth(e.to_string()))?;

        let code = extract_code(redirected.trim())?;
        let token = self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])?;

        self.save(&token);
        tracing::info!("authorized with Spotify");
        Ok(token)
    }

    fn request_token(&self, form: &[(&str, &str)]) -> Result<Token, ServiceError> {
        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(form)
            .send()
            .map_err(|e| ServiceError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Auth(format!("token endpoint returned {}: {}", status, body)));
        }

        let parsed: TokenResponse = response
            .json()
            .map_err(|e| ServiceError::Auth(e.to_string()))?;

        Ok(Token {
            access_token: parsed.access_token,
            refresh_token: parsed.refresh_token,
            expires_at: current_timestamp() + parsed.expires_in,
        })
    }

    fn load_cached(&self) -> Option<Token> {
        let contents = fs::read_to_string(&self.token_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!(path = %self.token_path.display(), error = %e, "ignoring unreadable token cache");
                None
            }
        }
    }

    fn save(&self, token: &Token) {
        let result = serde_json::to_string_pretty(token)
            .map_err(io::Error::other)
            .and_then(|json| fs::write(&self.token_path, json));

        if let Err(e) = result {
            tracing::warn!(path = %self.token_path.display(), error = %e, "could not cache token");
        }
    }
}

/// Pulls the authorization code out of the URL Spotify redirected the browser to.
pub fn extract_code(redirected_url: &str) -> Result<String, ServiceError> {
    let url = Url::parse(redirected_url)
        .map_err(|e| ServiceError::Auth(format!("invalid redirect URL: {}", e)))?;

    let mut code = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "error" => return Err(ServiceError::Auth(value.into_owned())),
            _ => {}
        }
    }

    code.ok_or_else(|| ServiceError::Auth("redirect URL has no authorization code".to_string()))
}

pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
