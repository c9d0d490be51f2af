use std::collections::HashSet;

use albumshelf::management::{
    AlbumStore, JsonFilePersistence, MemoryPersistence, Persistence, PersistenceError,
};
use albumshelf::types::{Album, AlbumDraft};
use tempfile::TempDir;
use uuid::Uuid;

fn draft(title: &str, year: i32) -> AlbumDraft {
    AlbumDraft {
        title: title.to_string(),
        artist: "Various".to_string(),
        year,
        ..AlbumDraft::default()
    }
}

#[tokio::test]
async fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFilePersistence::new(dir.path().join("albums.json"));
    assert!(persistence.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_empty_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.json");
    std::fs::write(&path, "  \n").unwrap();

    let persistence = JsonFilePersistence::new(path);
    assert!(persistence.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_malformed_file_is_serde_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.json");
    std::fs::write(&path, "{ not json").unwrap();

    let persistence = JsonFilePersistence::new(path);
    assert!(matches!(
        persistence.load().await,
        Err(PersistenceError::SerdeError(_))
    ));
}

#[tokio::test]
async fn test_commit_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/shelf/albums.json");
    let persistence = JsonFilePersistence::new(path.clone());

    let album = Album::from_draft(Uuid::new_v4(), draft("Nested", 2001));
    persistence.commit(&[album.clone()]).await.unwrap();

    assert!(path.is_file());
    assert!(!path.with_file_name("albums.json.tmp").exists());
    assert_eq!(persistence.load().await.unwrap(), vec![album]);
}

#[tokio::test]
async fn test_store_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.json");

    let mut store = AlbumStore::open(JsonFilePersistence::new(path.clone()))
        .await
        .unwrap();
    let keep = store.add(draft("Keep", 1990)).await.unwrap();
    let edit = store.add(draft("Edit", 1991)).await.unwrap();
    let gone = store.add(draft("Gone", 1992)).await.unwrap();

    let mut edited = edit.draft();
    edited.format = "Cassette".to_string();
    store.update(edit.id, edited).await.unwrap();
    store.remove(gone.id).await.unwrap();

    let before: HashSet<Uuid> = store.list().iter().map(|a| a.id).collect();
    let snapshot = store.list().to_vec();
    drop(store);

    let reopened = AlbumStore::open(JsonFilePersistence::new(path)).await.unwrap();
    let after: HashSet<Uuid> = reopened.list().iter().map(|a| a.id).collect();

    assert_eq!(before, after);
    assert_eq!(reopened.list(), snapshot.as_slice());
    assert_eq!(reopened.get(&keep.id).unwrap().title, "Keep");
    assert_eq!(reopened.get(&edit.id).unwrap().format, "Cassette");
    assert!(reopened.get(&gone.id).is_none());
}

#[tokio::test]
async fn test_stored_file_is_flat_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.json");

    let mut store = AlbumStore::open(JsonFilePersistence::new(path.clone()))
        .await
        .unwrap();
    store.add(draft("Flat", 2005)).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Flat");
    assert_eq!(items[0]["cover_art"], "default");
    assert!(items[0]["id"].is_string());
}

#[tokio::test]
async fn test_memory_persistence_forgets_commits() {
    let mut store = AlbumStore::open(MemoryPersistence::new()).await.unwrap();
    store.add(draft("Ephemeral", 2010)).await.unwrap();
    assert_eq!(store.len(), 1);

    assert!(store.persistence().load().await.unwrap().is_empty());
}
