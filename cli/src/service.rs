use thiserror::Error;

/// An artist as described by the music service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Rate limit exceeded. Wait for {retry_after} seconds.")]
    RateLimited { retry_after: u64 },

    #[error("Artist not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Transient(String),

    #[error("Authorization failed: {0}")]
    Auth(String),
}

impl ServiceError {
    /// Errors that must stop the session instead of skipping a single lookup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ServiceError::RateLimited { .. } | ServiceError::Auth(_))
    }
}

pub type FollowedArtists<'a> = Box<dyn Iterator<Item = Result<ArtistProfile, ServiceError>> + 'a>;

/// The music-streaming service the session pulls artists and related-artist edges from.
pub trait MusicService {
    /// Followed artists, fetched page by page as the iterator advances.
    fn followed_artists(&self) -> FollowedArtists<'_>;

    fn artist(&self, id: &str) -> Result<ArtistProfile, ServiceError>;

    fn related_artists(&self, id: &str) -> Result<Vec<String>, ServiceError>;
}
