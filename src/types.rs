use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

/// Cover art reference used when an album has no artwork of its own.
pub const DEFAULT_COVER_ART: &str = "default";

/// Release year a fresh draft starts out with.
pub const DEFAULT_RELEASE_YEAR: i32 = 2022;

fn default_cover_art() -> String {
    DEFAULT_COVER_ART.to_string()
}

/// A single album on the shelf.
///
/// The `id` is assigned once when the album is created and never changes;
/// every other field is overwritten as a whole when the album is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default = "default_cover_art")]
    pub cover_art: String,
}

impl Album {
    /// Builds an album from a draft under the given id.
    pub fn from_draft(id: Uuid, draft: AlbumDraft) -> Self {
        Self {
            id,
            title: draft.title,
            artist: draft.artist,
            genre: draft.genre,
            format: draft.format,
            year: draft.year,
            cover_art: draft.cover_art,
        }
    }

    /// Copies the editable fields into a draft that can be changed without
    /// touching the stored album.
    pub fn draft(&self) -> AlbumDraft {
        AlbumDraft {
            title: self.title.clone(),
            artist: self.artist.clone(),
            genre: self.genre.clone(),
            format: self.format.clone(),
            year: self.year,
            cover_art: self.cover_art.clone(),
        }
    }

    /// Overwrites every field except `id`.
    pub(crate) fn apply(&mut self, draft: AlbumDraft) {
        self.title = draft.title;
        self.artist = draft.artist;
        self.genre = draft.genre;
        self.format = draft.format;
        self.year = draft.year;
        self.cover_art = draft.cover_art;
    }
}

/// Uncommitted album fields, held while an album is being created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub format: String,
    pub year: i32,
    pub cover_art: String,
}

impl Default for AlbumDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            genre: String::new(),
            format: String::new(),
            year: DEFAULT_RELEASE_YEAR,
            cover_art: default_cover_art(),
        }
    }
}

/// An album as read from an import file; records without an id get a fresh
/// one when they are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default = "default_cover_art")]
    pub cover_art: String,
}

impl ImportRecord {
    pub fn into_parts(self) -> (Option<Uuid>, AlbumDraft) {
        let draft = AlbumDraft {
            title: self.title,
            artist: self.artist,
            genre: self.genre,
            format: self.format,
            year: self.year,
            cover_art: self.cover_art,
        };
        (self.id, draft)
    }
}

/// Change notifications published by the album store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumEvent {
    Added(Album),
    Updated(Album),
    /// Carries the album as it was right before removal.
    Removed(Album),
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub format: String,
    pub year: i32,
    pub cover: String,
}
