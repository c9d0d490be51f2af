use uuid::Uuid;

use crate::types::{Album, AlbumDraft, AlbumTableRow, DEFAULT_COVER_ART};

pub const MIN_RELEASE_YEAR: i32 = 1800;
pub const MAX_RELEASE_YEAR: i32 = 2022;

/// Number of sample albums the in-memory shelf starts with.
pub const SAMPLE_ALBUM_COUNT: usize = 11;

pub fn parse_year(s: &str) -> Result<i32, String> {
    let year: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid year '{}'", s))?;

    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(format!(
            "year must be between {} and {}",
            MIN_RELEASE_YEAR, MAX_RELEASE_YEAR
        ));
    }

    Ok(year)
}

pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string().chars().take(8).collect()
}

/// Resolves a user supplied id, either a full UUID or a unique prefix of one.
///
/// Prefixes are matched against the hyphenless form, so `3f2a` and `3F2A`
/// behave the same.
pub fn resolve_album_id(albums: &[Album], needle: &str) -> Result<Uuid, String> {
    let needle = needle.trim();
    if let Ok(id) = Uuid::parse_str(needle) {
        return Ok(id);
    }

    let prefix: String = needle
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_lowercase();
    if prefix.is_empty() {
        return Err("album id must not be empty".to_string());
    }

    let matches: Vec<Uuid> = albums
        .iter()
        .map(|a| a.id)
        .filter(|id| id.simple().to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no album matches id '{}'", needle)),
        _ => Err(format!(
            "id '{}' is ambiguous ({} albums match)",
            needle,
            matches.len()
        )),
    }
}

pub fn filter_albums(albums: &[Album], search: Option<&str>) -> Vec<Album> {
    let Some(term) = search.map(|s| s.trim().to_lowercase()) else {
        return albums.to_vec();
    };

    albums
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&term)
                || a.artist.to_lowercase().contains(&term)
                || a.genre.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

pub fn album_table_rows(albums: Vec<Album>) -> Vec<AlbumTableRow> {
    albums
        .into_iter()
        .map(|a| AlbumTableRow {
            id: short_id(&a.id),
            title: a.title,
            artist: a.artist,
            genre: a.genre,
            format: a.format,
            year: a.year,
            cover: a.cover_art,
        })
        .collect()
}

pub fn sample_albums(count: usize) -> Vec<AlbumDraft> {
    (0..count)
        .map(|i| {
            let offset = i32::try_from(i).unwrap_or(i32::MAX);
            AlbumDraft {
                title: format!("Album {}", i),
                artist: format!("Artist{}", i),
                genre: format!("Genre{}", i),
                format: format!("Format{}", i),
                year: MIN_RELEASE_YEAR
                    .saturating_add(offset)
                    .min(MAX_RELEASE_YEAR),
                cover_art: DEFAULT_COVER_ART.to_string(),
            }
        })
        .collect()
}

/// Id of the `index`-th sample album; the same on every run.
pub fn sample_album_id(index: usize) -> Uuid {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("albumshelf:sample:{}", index).as_bytes(),
    )
}

/// The sample albums with stable ids, as the in-memory shelf starts out.
pub fn sample_shelf(count: usize) -> Vec<Album> {
    sample_albums(count)
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Album::from_draft(sample_album_id(i), draft))
        .collect()
}
