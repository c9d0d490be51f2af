use std::{
    io::{self, Write},
    path::Path,
};

use tabled::Table;

use crate::{
    Res, error, info,
    management::{AlbumStore, Persistence, StoreError},
    success,
    types::{Album, AlbumDraft, ImportRecord},
    utils, warning,
};

/// Field values given on the command line; `None` keeps the draft's value.
#[derive(Debug, Clone, Default)]
pub struct AlbumFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub format: Option<String>,
    pub year: Option<i32>,
    pub cover_art: Option<String>,
}

impl AlbumFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.genre.is_none()
            && self.format.is_none()
            && self.year.is_none()
            && self.cover_art.is_none()
    }

    pub fn apply_to(self, draft: &mut AlbumDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(artist) = self.artist {
            draft.artist = artist;
        }
        if let Some(genre) = self.genre {
            draft.genre = genre;
        }
        if let Some(format) = self.format {
            draft.format = format;
        }
        if let Some(year) = self.year {
            draft.year = year;
        }
        if let Some(cover_art) = self.cover_art {
            draft.cover_art = cover_art;
        }
    }
}

pub fn list_albums<P: Persistence>(store: &AlbumStore<P>, search: Option<String>) {
    let albums = utils::filter_albums(store.list(), search.as_deref());
    if albums.is_empty() {
        match search {
            Some(term) => info!("No albums match '{}'.", term),
            None => info!("Your shelf is empty. Add one with `albumshelf add`."),
        }
        return;
    }

    let table = Table::new(utils::album_table_rows(albums));
    println!("{}", table);
}

pub async fn add_album<P: Persistence>(store: &mut AlbumStore<P>, fields: AlbumFields) {
    let mut draft = AlbumDraft::default();
    fields.apply_to(&mut draft);

    match store.add(draft).await {
        Ok(album) => success!(
            "Added '{}' by {} ({}).",
            album.title,
            album.artist,
            utils::short_id(&album.id)
        ),
        Err(e) => error!("Cannot add album. Err: {}", e),
    }
}

pub async fn edit_album<P: Persistence>(store: &mut AlbumStore<P>, id: &str, fields: AlbumFields) {
    let album = match find_album(store, id) {
        Ok(album) => album,
        Err(e) => error!("{}", e),
    };

    if fields.is_empty() {
        warning!("Nothing to change for '{}'.", album.title);
        return;
    }

    let mut draft = album.draft();
    fields.apply_to(&mut draft);

    match store.update(album.id, draft).await {
        Ok(updated) => success!("Updated '{}'.", updated.title),
        Err(StoreError::NotFound(id)) => warning!("Album {} no longer exists.", id),
        Err(e) => error!("Cannot update album. Err: {}", e),
    }
}

pub async fn remove_album<P: Persistence>(store: &mut AlbumStore<P>, id: &str, confirmed: bool) {
    let album = match find_album(store, id) {
        Ok(album) => album,
        Err(e) => error!("{}", e),
    };

    if !confirmed && !confirm_delete(&album) {
        info!("Kept '{}'.", album.title);
        return;
    }

    match store.remove(album.id).await {
        Ok(removed) => success!("Deleted '{}'.", removed.title),
        Err(StoreError::NotFound(id)) => warning!("Album {} no longer exists.", id),
        Err(e) => error!("Cannot delete album. Err: {}", e),
    }
}

pub async fn seed_albums<P: Persistence>(store: &mut AlbumStore<P>, count: usize) {
    let mut added = 0;
    for draft in utils::sample_albums(count) {
        if let Err(e) = store.add(draft).await {
            error!("Cannot add sample album. Err: {}", e);
        }
        added += 1;
    }

    success!("Added {} sample albums.", added);
}

/// Outcome of importing a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Adds the records to the store. Records with an id keep it unless it is
/// already taken, in which case they are skipped; records without one are
/// added under a fresh id.
pub async fn import_records<P: Persistence>(
    store: &mut AlbumStore<P>,
    records: Vec<ImportRecord>,
) -> Result<ImportSummary, StoreError> {
    let mut summary = ImportSummary::default();
    for record in records {
        let (id, draft) = record.into_parts();
        let result = match id {
            Some(id) => store.insert(Album::from_draft(id, draft)).await,
            None => store.add(draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => summary.imported += 1,
            Err(StoreError::DuplicateId(_)) => summary.skipped += 1,
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

pub async fn import_albums<P: Persistence>(store: &mut AlbumStore<P>, path: &Path) {
    let records = match read_import_file(path).await {
        Ok(r) => r,
        Err(e) => error!("Cannot import {}. Err: {}", path.display(), e),
    };

    let summary = match import_records(store, records).await {
        Ok(s) => s,
        Err(e) => error!("Cannot import album. Err: {}", e),
    };

    if summary.skipped > 0 {
        warning!(
            "Skipped {} albums that are already on the shelf.",
            summary.skipped
        );
    }
    success!("Imported {} albums.", summary.imported);
}

pub async fn export_albums<P: Persistence>(store: &AlbumStore<P>, path: &Path) {
    let json = match serde_json::to_string_pretty(store.list()) {
        Ok(j) => j,
        Err(e) => error!("Cannot serialize albums. Err: {}", e),
    };

    if let Err(e) = async_fs::write(path, json).await {
        error!("Cannot write {}. Err: {}", path.display(), e);
    }

    success!("Exported {} albums to {}.", store.len(), path.display());
}

async fn read_import_file(path: &Path) -> Res<Vec<ImportRecord>> {
    let content = async_fs::read_to_string(path).await?;
    let records: Vec<ImportRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

fn find_album<P: Persistence>(store: &AlbumStore<P>, id: &str) -> Result<Album, String> {
    let id = utils::resolve_album_id(store.list(), id)?;
    store
        .get(&id)
        .cloned()
        .ok_or_else(|| format!("no album with id {}", id))
}

fn confirm_delete(album: &Album) -> bool {
    print!("Delete '{}' by {}? [y/N] ", album.title, album.artist);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
