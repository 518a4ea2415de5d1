use crate::artist::{Artist, Status};
use crate::error::RegistryError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Every artist seen during a session, keyed by ID and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    order: Vec<String>,
    artists: FxHashMap<String, Artist>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unlabeled artist if `id` is unknown. Existing records are never touched.
    pub fn upsert(&mut self, id: &str, name: &str, genres: Vec<String>) -> bool {
        if self.artists.contains_key(id) {
            return false;
        }
        self.insert_new(Artist::new(id, name, genres));
        true
    }

    pub fn set_status(&mut self, id: &str, status: Status) -> Result<(), RegistryError> {
        self.get_mut(id)?.status = status;
        Ok(())
    }

    /// Replaces the related set of `id`, creating stubs for unseen IDs.
    ///
    /// Returns the IDs of the stubs created by this call, in edge order.
    pub fn set_related(
        &mut self,
        id: &str,
        related_ids: Vec<String>,
    ) -> Result<Vec<String>, RegistryError> {
        if !self.artists.contains_key(id) {
            return Err(RegistryError::UnknownArtist(id.to_string()));
        }

        let related_ids = dedup_preserving_order(related_ids);
        let mut created_stubs = Vec::new();
        for related_id in &related_ids {
            if !self.artists.contains_key(related_id) {
                self.insert_new(Artist::stub(related_id.as_str()));
                created_stubs.push(related_id.clone());
            }
        }

        self.get_mut(id)?.related = related_ids;
        Ok(created_stubs)
    }

    /// Fills in the name and genres reported by the music service.
    pub fn describe(
        &mut self,
        id: &str,
        name: &str,
        genres: Vec<String>,
    ) -> Result<(), RegistryError> {
        let artist = self.get_mut(id)?;
        artist.name = name.to_string();
        artist.genres = genres;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Artist> {
        self.artists.get(id)
    }

    pub fn status(&self, id: &str) -> Option<Status> {
        self.artists.get(id).map(|artist| artist.status)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.artists.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artist> + '_ {
        self.order.iter().filter_map(|id| self.artists.get(id))
    }

    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.artists
            .get(id)
            .map(Artist::display_name)
            .unwrap_or(id)
    }

    pub fn ids_with_status(&self, status: Status) -> Vec<String> {
        self.iter()
            .filter(|artist| artist.status == status)
            .map(|artist| artist.id.clone())
            .collect()
    }

    pub fn count_with_status(&self, status: Status) -> usize {
        self.iter().filter(|artist| artist.status == status).count()
    }

    pub fn unlabeled_ids(&self) -> Vec<String> {
        self.ids_with_status(Status::Unlabeled)
    }

    pub fn potential_ids(&self) -> Vec<String> {
        self.ids_with_status(Status::Potential)
    }

    pub fn positive_ids(&self) -> Vec<String> {
        self.ids_with_status(Status::Positive)
    }

    /// Inserts a fully formed record, as read back from storage. Returns false on a duplicate ID.
    pub(crate) fn insert_loaded(&mut self, artist: Artist) -> bool {
        if self.artists.contains_key(&artist.id) {
            return false;
        }
        self.insert_new(artist);
        true
    }

    fn insert_new(&mut self, artist: Artist) {
        self.order.push(artist.id.clone());
        self.artists.insert(artist.id.clone(), artist);
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Artist, RegistryError> {
        self.artists
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownArtist(id.to_string()))
    }
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
