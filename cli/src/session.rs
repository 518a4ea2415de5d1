use crate::app::StorePaths;
use crate::service::{MusicService, ServiceError};
use artistriage_core::{
    Artist, InferenceReport, Registry, RegistryError, Status, load_registry, run_cycle,
    save_potentials, save_registry,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Could not persist artists: {0}")]
    Io(#[from] io::Error),

    #[error("Artists can only be classified as +, - or =, not {0}")]
    InvalidClassification(Status),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedRefresh {
    pub related_count: usize,
    /// Artists first seen through this refresh
    pub new_artists: Vec<String>,
    /// New artists the service could not describe; they stay stubs
    pub undescribed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutcome {
    pub related: Option<RelatedRefresh>,
    pub inference: InferenceReport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub seen: usize,
    pub added: usize,
}

/// One interactive triage session over a persisted registry.
///
/// Every mutating call saves the registry and regenerates the potentials file
/// before returning, including when it fails part way through.
pub struct Session<S: MusicService> {
    registry: Registry,
    store: StorePaths,
    service: S,
}

impl<S: MusicService> Session<S> {
    pub fn open(store: StorePaths, service: S) -> Result<Self, SessionError> {
        let registry = load_registry(&store.registry)?;
        Ok(Self::with_registry(registry, store, service))
    }

    pub fn with_registry(registry: Registry, store: StorePaths, service: S) -> Self {
        Self {
            registry,
            store,
            service,
        }
    }

    /// Brings derived labels up to date before the first prompt.
    pub fn start(&mut self) -> Result<InferenceReport, SessionError> {
        self.infer_and_persist()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn next_candidate(&self) -> Option<String> {
        self.registry.unlabeled_ids().into_iter().next()
    }

    pub fn remaining(&self) -> usize {
        self.registry.count_with_status(Status::Unlabeled)
    }

    pub fn potentials(&self) -> Vec<&Artist> {
        self.registry
            .iter()
            .filter(|artist| artist.status == Status::Potential)
            .collect()
    }

    pub fn classify(&mut self, id: &str, status: Status) -> Result<ClassifyOutcome, SessionError> {
        if !status.is_user_assignable() {
            return Err(SessionError::InvalidClassification(status));
        }

        let was_last_unlabeled = self.registry.status(id) == Some(Status::Unlabeled)
            && self.remaining() == 1;

        self.registry.set_status(id, status)?;
        tracing::info!(artist = id, %status, "artist classified");

        let refresh = if status == Status::Positive || was_last_unlabeled {
            Some(self.refresh_related(id))
        } else {
            None
        };

        // Whatever the refresh managed to record is kept even if it stopped early.
        let inference = self.infer_and_persist()?;
        let related = refresh.transpose()?;

        Ok(ClassifyOutcome { related, inference })
    }

    /// Replaces the related set of `id` with the service's and describes newly seen artists.
    pub fn refresh_related(&mut self, id: &str) -> Result<RelatedRefresh, SessionError> {
        let related_ids = match self.service.related_artists(id) {
            Ok(related_ids) => related_ids,
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                tracing::error!(artist = id, error = %e, "could not fetch related artists");
                Vec::new()
            }
        };

        let new_artists = self.registry.set_related(id, related_ids)?;
        let related_count = self.registry.get(id).map_or(0, |artist| artist.related.len());

        let mut undescribed = Vec::new();
        for new_id in &new_artists {
            match self.service.artist(new_id) {
                Ok(profile) => self.registry.describe(new_id, &profile.name, profile.genres)?,
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    tracing::error!(artist = %new_id, error = %e, "could not describe related artist");
                    undescribed.push(new_id.clone());
                }
            }
        }

        tracing::info!(
            artist = id,
            related = related_count,
            new = new_artists.len(),
            "related artists refreshed"
        );

        Ok(RelatedRefresh {
            related_count,
            new_artists,
            undescribed,
        })
    }

    /// Refreshes name and genres of `id` from the service for display.
    ///
    /// Lookup failures other than fatal ones fall back to what the registry already holds.
    pub fn lookup(&mut self, id: &str) -> Result<&Artist, SessionError> {
        match self.service.artist(id) {
            Ok(profile) => {
                let changed = self
                    .registry
                    .get(id)
                    .is_some_and(|artist| artist.name != profile.name || artist.genres != profile.genres);
                if changed {
                    self.registry.describe(id, &profile.name, profile.genres)?;
                    self.persist()?;
                }
            }
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => tracing::warn!(artist = id, error = %e, "could not look up artist"),
        }

        self.registry
            .get(id)
            .ok_or_else(|| RegistryError::UnknownArtist(id.to_string()).into())
    }

    /// Adds followed artists the registry has not seen yet as unlabeled candidates.
    pub fn import_followed(&mut self) -> Result<ImportSummary, SessionError> {
        let mut summary = ImportSummary::default();
        let mut failure = None;

        for result in self.service.followed_artists() {
            match result {
                Ok(profile) => {
                    summary.seen += 1;
                    if self.registry.upsert(&profile.id, &profile.name, profile.genres) {
                        summary.added += 1;
                    }
                }
                Err(e) if e.is_fatal() => {
                    failure = Some(e);
                    break;
                }
                Err(e) => {
                    tracing::error!(error = %e, "followed artists listing stopped early");
                    break;
                }
            }
        }

        self.persist()?;
        tracing::info!(seen = summary.seen, added = summary.added, "followed artists imported");

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(summary),
        }
    }

    pub fn persist(&self) -> Result<(), SessionError> {
        save_registry(&self.registry, &self.store.registry)?;
        save_potentials(&self.registry, &self.store.potentials)?;
        Ok(())
    }

    fn infer_and_persist(&mut self) -> Result<InferenceReport, SessionError> {
        let report = run_cycle(&mut self.registry)?;
        self.persist()?;
        Ok(report)
    }
}
