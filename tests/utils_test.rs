use albumshelf::types::{Album, AlbumDraft, DEFAULT_COVER_ART};
use albumshelf::utils::*;
use std::collections::HashSet;

use uuid::Uuid;

// Helper function to create a test album
fn create_test_album(id: &str, title: &str, artist: &str, genre: &str) -> Album {
    Album {
        id: Uuid::parse_str(id).unwrap(),
        title: title.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        format: "CD".to_string(),
        year: 2000,
        cover_art: DEFAULT_COVER_ART.to_string(),
    }
}

fn shelf() -> Vec<Album> {
    vec![
        create_test_album(
            "3f2a0c1e-0000-4000-8000-000000000001",
            "OK Computer",
            "Radiohead",
            "Rock",
        ),
        create_test_album(
            "3f2b9d44-0000-4000-8000-000000000002",
            "Blue Train",
            "John Coltrane",
            "Jazz",
        ),
        create_test_album(
            "a1c0ffee-0000-4000-8000-000000000003",
            "Kid A",
            "Radiohead",
            "Electronic",
        ),
    ]
}

#[test]
fn test_parse_year_accepts_range_bounds() {
    assert_eq!(parse_year("1800"), Ok(1800));
    assert_eq!(parse_year("2022"), Ok(2022));
    assert_eq!(parse_year(" 1997 "), Ok(1997));
}

#[test]
fn test_parse_year_rejects_out_of_range_and_garbage() {
    assert!(parse_year("1799").is_err());
    assert!(parse_year("2023").is_err());
    assert!(parse_year("nineteen").is_err());
    assert!(parse_year("").is_err());
}

#[test]
fn test_short_id() {
    let id = Uuid::parse_str("3f2a0c1e-0000-4000-8000-000000000001").unwrap();
    assert_eq!(short_id(&id), "3f2a0c1e");
}

#[test]
fn test_resolve_album_id_full_uuid() {
    let albums = shelf();
    let id = resolve_album_id(&albums, "a1c0ffee-0000-4000-8000-000000000003").unwrap();
    assert_eq!(id, albums[2].id);
}

#[test]
fn test_resolve_album_id_unique_prefix() {
    let albums = shelf();
    assert_eq!(resolve_album_id(&albums, "a1c").unwrap(), albums[2].id);
    assert_eq!(resolve_album_id(&albums, "3F2A").unwrap(), albums[0].id);
}

#[test]
fn test_resolve_album_id_ambiguous_prefix() {
    let albums = shelf();
    let err = resolve_album_id(&albums, "3f2").unwrap_err();
    assert!(err.contains("ambiguous"));
}

#[test]
fn test_resolve_album_id_no_match() {
    let albums = shelf();
    assert!(resolve_album_id(&albums, "ffff").is_err());
    assert!(resolve_album_id(&albums, "  ").is_err());
    assert!(resolve_album_id(&[], "3f2a").is_err());
}

#[test]
fn test_filter_albums_without_search_returns_all() {
    let albums = shelf();
    assert_eq!(filter_albums(&albums, None), albums);
}

#[test]
fn test_filter_albums_is_case_insensitive() {
    let albums = shelf();
    let found = filter_albums(&albums, Some("RADIO"));
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|a| a.artist == "Radiohead"));
}

#[test]
fn test_filter_albums_matches_title_and_genre() {
    let albums = shelf();
    assert_eq!(filter_albums(&albums, Some("train"))[0].title, "Blue Train");
    assert_eq!(filter_albums(&albums, Some("jazz"))[0].title, "Blue Train");
    assert!(filter_albums(&albums, Some("polka")).is_empty());
}

#[test]
fn test_album_table_rows_keep_order() {
    let rows = album_table_rows(shelf());
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["OK Computer", "Blue Train", "Kid A"]);
    assert_eq!(rows[0].id, "3f2a0c1e");
    assert_eq!(rows[0].cover, DEFAULT_COVER_ART);
}

#[test]
fn test_sample_albums() {
    let samples = sample_albums(SAMPLE_ALBUM_COUNT);
    assert_eq!(samples.len(), 11);
    assert_eq!(samples[0].title, "Album 0");
    assert_eq!(samples[10].artist, "Artist10");
    assert_eq!(samples[3].genre, "Genre3");
    assert_eq!(samples[3].format, "Format3");
    assert!(
        samples
            .iter()
            .all(|s| (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&s.year))
    );
    assert!(samples.iter().all(|s| s.cover_art == DEFAULT_COVER_ART));
}

#[test]
fn test_default_draft() {
    let draft = AlbumDraft::default();
    assert!(draft.title.is_empty());
    assert_eq!(draft.year, 2022);
    assert_eq!(draft.cover_art, "default");
}

#[test]
fn test_draft_copies_fields_and_leaves_album_untouched() {
    let album = shelf().remove(0);
    let mut draft = album.draft();
    assert_eq!(draft.title, album.title);
    assert_eq!(draft.year, album.year);

    draft.title = "Changed".to_string();
    assert_eq!(album.title, "OK Computer");
}

#[test]
fn test_album_missing_cover_art_defaults() {
    let json = r#"{"id":"3f2a0c1e-0000-4000-8000-000000000001","title":"Untitled"}"#;
    let album: Album = serde_json::from_str(json).unwrap();
    assert_eq!(album.cover_art, DEFAULT_COVER_ART);
    assert!(album.artist.is_empty());
    assert_eq!(album.year, 0);
}

#[test]
fn test_sample_albums_huge_count_stays_in_range() {
    let draft = sample_albums(5000).pop().unwrap();
    assert_eq!(draft.year, MAX_RELEASE_YEAR);
    assert_eq!(draft.title, "Album 4999");
}

#[test]
fn test_sample_shelf_ids_are_stable_across_runs() {
    let first = sample_shelf(SAMPLE_ALBUM_COUNT);
    let second = sample_shelf(SAMPLE_ALBUM_COUNT);
    assert_eq!(first, second);

    let ids: HashSet<Uuid> = first.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), SAMPLE_ALBUM_COUNT);
    assert_eq!(first[4].id, sample_album_id(4));
}

#[test]
fn test_sample_shelf_ids_resolve_by_short_id() {
    let shelf = sample_shelf(SAMPLE_ALBUM_COUNT);
    let listed = short_id(&sample_shelf(SAMPLE_ALBUM_COUNT)[0].id);
    assert_eq!(resolve_album_id(&shelf, &listed).unwrap(), shelf[0].id);
}
