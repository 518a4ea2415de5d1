use crate::auth::{Authenticator, Token};
use crate::service::{ArtistProfile, FollowedArtists, MusicService, ServiceError};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::RETRY_AFTER;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{cell::RefCell, collections::VecDeque, time::Duration};

const API_BASE: &str = "https://api.spotify.com/v1";
const FOLLOWED_PAGE_SIZE: u32 = 50;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 10;

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    id: String,
    name: String,
    #[serde(default)]
    genres: Vec<String>,
}

impl From<SpotifyArtist> for ArtistProfile {
    fn from(artist: SpotifyArtist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FollowedResponse {
    artists: FollowedPage,
}

#[derive(Debug, Deserialize)]
struct FollowedPage {
    items: Vec<SpotifyArtist>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelatedResponse {
    artists: Vec<SpotifyArtist>,
}

pub struct SpotifyClient {
    http: Client,
    auth: Authenticator,
    token: RefCell<Token>,
}

impl SpotifyClient {
    pub fn connect(auth: Authenticator, http: Client) -> Result<Self, ServiceError> {
        let token = auth.obtain_token()?;
        Ok(Self {
            http,
            auth,
            token: RefCell::new(token),
        })
    }

    pub fn http_client() -> Result<Client, ServiceError> {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Transient(e.to_string()))
    }

    fn access_token(&self) -> Result<String, ServiceError> {
        if self.token.borrow().is_expired() {
            let refreshed = self.auth.refresh(&self.token.borrow())?;
            *self.token.borrow_mut() = refreshed;
        }
        Ok(self.token.borrow().access_token.clone())
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, subject: &str) -> Result<T, ServiceError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(self.access_token()?)
            .send()
            .map_err(|e| ServiceError::Transient(e.to_string()))?;

        let response = check_status(response, subject)?;
        response
            .json()
            .map_err(|e| ServiceError::Transient(format!("unexpected response for {}: {}", subject, e)))
    }

    fn fetch_followed_page(&self, url: &str) -> Result<FollowedPage, ServiceError> {
        let response: FollowedResponse = self.get_json(url, "followed artists")?;
        Ok(response.artists)
    }
}

impl MusicService for SpotifyClient {
    fn followed_artists(&self) -> FollowedArtists<'_> {
        let first_page = format!(
            "{}/me/following?type=artist&limit={}",
            API_BASE, FOLLOWED_PAGE_SIZE
        );
        Box::new(FollowedPages {
            client: self,
            next_url: Some(first_page),
            buffered: VecDeque::new(),
        })
    }

    fn artist(&self, id: &str) -> Result<ArtistProfile, ServiceError> {
        let url = format!("{}/artists/{}", API_BASE, id);
        let artist: SpotifyArtist = self.get_json(&url, id)?;
        Ok(artist.into())
    }

    fn related_artists(&self, id: &str) -> Result<Vec<String>, ServiceError> {
        let url = format!("{}/artists/{}/related-artists", API_BASE, id);
        let related: RelatedResponse = self.get_json(&url, id)?;
        Ok(related.artists.into_iter().map(|artist| artist.id).collect())
    }
}

/// Walks the cursor-paginated followed-artist list one page at a time.
struct FollowedPages<'a> {
    client: &'a SpotifyClient,
    next_url: Option<String>,
    buffered: VecDeque<ArtistProfile>,
}

impl Iterator for FollowedPages<'_> {
    type Item = Result<ArtistProfile, ServiceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(artist) = self.buffered.pop_front() {
                return Some(Ok(artist));
            }

            let url = self.next_url.take()?;
            match self.client.fetch_followed_page(&url) {
                Ok(page) => {
                    tracing::debug!(count = page.items.len(), "fetched followed artists page");
                    self.next_url = page.next;
                    self.buffered.extend(page.items.into_iter().map(ArtistProfile::from));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

fn check_status(response: Response, subject: &str) -> Result<Response, ServiceError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::TOO_MANY_REQUESTS => Err(ServiceError::RateLimited {
            retry_after: parse_retry_after(&response),
        }),
        StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
            Err(ServiceError::NotFound(subject.to_string()))
        }
        StatusCode::UNAUTHORIZED => Err(ServiceError::Auth(format!(
            "Spotify rejected the access token while requesting {}",
            subject
        ))),
        status => Err(ServiceError::Transient(format!(
            "Spotify returned {} for {}",
            status, subject
        ))),
    }
}

fn parse_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS)
}
