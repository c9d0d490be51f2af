use std::{collections::HashSet, fmt};

use tokio::sync::broadcast;
use uuid::Uuid;

use super::persistence::{Persistence, PersistenceError};
use crate::types::{Album, AlbumDraft, AlbumEvent};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub enum StoreError {
    NotFound(Uuid),
    DuplicateId(Uuid),
    Persistence(PersistenceError),
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        StoreError::Persistence(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "no album with id {}", id),
            StoreError::DuplicateId(id) => write!(f, "an album with id {} already exists", id),
            StoreError::Persistence(e) => write!(f, "failed to save library: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

/// The authoritative, ordered collection of albums.
///
/// Every mutation publishes an [`AlbumEvent`] and then commits the whole
/// collection through the persistence binding. A failed commit is returned to
/// the caller but the in-memory change is kept, so the next successful commit
/// writes it out.
pub struct AlbumStore<P: Persistence> {
    albums: Vec<Album>,
    persistence: P,
    events: broadcast::Sender<AlbumEvent>,
}

impl<P: Persistence> AlbumStore<P> {
    /// Loads the previously committed albums and takes ownership of them.
    pub async fn open(persistence: P) -> Result<Self, StoreError> {
        let loaded = persistence.load().await?;

        // first occurrence wins if the backing data ever repeats an id
        let mut seen = HashSet::new();
        let albums = loaded
            .into_iter()
            .filter(|a| seen.insert(a.id))
            .collect();

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            albums,
            persistence,
            events,
        })
    }

    pub fn list(&self) -> &[Album] {
        &self.albums
    }

    pub fn get(&self, id: &Uuid) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == *id)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AlbumEvent> {
        self.events.subscribe()
    }

    /// Creates a new album with a freshly generated id and appends it.
    pub async fn add(&mut self, draft: AlbumDraft) -> Result<Album, StoreError> {
        let album = Album::from_draft(self.fresh_id(), draft);
        self.albums.push(album.clone());
        self.publish(AlbumEvent::Added(album.clone()));
        self.commit().await?;
        Ok(album)
    }

    /// Appends an album that already carries an id.
    pub async fn insert(&mut self, album: Album) -> Result<(), StoreError> {
        if self.get(&album.id).is_some() {
            return Err(StoreError::DuplicateId(album.id));
        }

        self.albums.push(album.clone());
        self.publish(AlbumEvent::Added(album));
        self.commit().await
    }

    /// Replaces every field of the album with `id` by the draft's values.
    pub async fn update(&mut self, id: Uuid, draft: AlbumDraft) -> Result<Album, StoreError> {
        let album = self
            .albums
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;

        album.apply(draft);
        let updated = album.clone();
        self.publish(AlbumEvent::Updated(updated.clone()));
        self.commit().await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<Album, StoreError> {
        let index = self
            .albums
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = self.albums.remove(index);
        self.publish(AlbumEvent::Removed(removed.clone()));
        self.commit().await?;
        Ok(removed)
    }

    async fn commit(&self) -> Result<(), StoreError> {
        self.persistence.commit(&self.albums).await?;
        Ok(())
    }

    fn publish(&self, event: AlbumEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
