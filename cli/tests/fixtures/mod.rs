#![allow(dead_code)]

use artistriage::{ArtistProfile, MusicService, ServiceError, Session, StorePaths};
use artistriage::service::FollowedArtists;
use artistriage_core::Registry;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use tempfile::TempDir;

/// In-memory stand-in for the streaming service.
#[derive(Default)]
pub struct FakeService {
    pub profiles: FxHashMap<String, ArtistProfile>,
    pub related: FxHashMap<String, Vec<String>>,
    pub followed: Vec<String>,
    pub rate_limited: FxHashSet<String>,
    pub related_unavailable: FxHashSet<String>,
    pub related_calls: RefCell<Vec<String>>,
}

impl FakeService {
    pub fn with_artist(mut self, id: &str, name: &str, genres: &[&str]) -> Self {
        self.profiles.insert(
            id.to_string(),
            ArtistProfile {
                id: id.to_string(),
                name: name.to_string(),
                genres: genres.iter().map(|genre| genre.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_related(mut self, id: &str, related: &[&str]) -> Self {
        self.related.insert(
            id.to_string(),
            related.iter().map(|related_id| related_id.to_string()).collect(),
        );
        self
    }

    pub fn with_followed(mut self, ids: &[&str]) -> Self {
        self.followed = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn rate_limiting(mut self, id: &str) -> Self {
        self.rate_limited.insert(id.to_string());
        self
    }

    pub fn related_unavailable(mut self, id: &str) -> Self {
        self.related_unavailable.insert(id.to_string());
        self
    }

    fn check_rate_limit(&self, id: &str) -> Result<(), ServiceError> {
        if self.rate_limited.contains(id) {
            return Err(ServiceError::RateLimited { retry_after: 30 });
        }
        Ok(())
    }
}

impl MusicService for FakeService {
    fn followed_artists(&self) -> FollowedArtists<'_> {
        Box::new(self.followed.iter().map(move |id| {
            self.profiles
                .get(id)
                .cloned()
                .ok_or_else(|| ServiceError::Transient(format!("no profile for {}", id)))
        }))
    }

    fn artist(&self, id: &str) -> Result<ArtistProfile, ServiceError> {
        self.check_rate_limit(id)?;
        self.profiles
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    fn related_artists(&self, id: &str) -> Result<Vec<String>, ServiceError> {
        self.check_rate_limit(id)?;
        self.related_calls.borrow_mut().push(id.to_string());
        if self.related_unavailable.contains(id) {
            return Err(ServiceError::Transient(format!("related artists of {} unavailable", id)));
        }
        Ok(self.related.get(id).cloned().unwrap_or_default())
    }
}

pub fn session_with(registry: Registry, service: FakeService) -> (TempDir, Session<FakeService>) {
    let dir = TempDir::new().unwrap();
    let store = StorePaths::in_dir(dir.path());
    (dir, Session::with_registry(registry, store, service))
}

pub fn registry_of(artists: &[(&str, &str)]) -> Registry {
    let mut registry = Registry::new();
    for (id, name) in artists {
        registry.upsert(id, name, vec![]);
    }
    registry
}
