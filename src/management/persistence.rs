use std::{
    fmt,
    future::Future,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use crate::types::Album;

#[derive(Debug)]
pub enum PersistenceError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for PersistenceError {
    fn from(err: Error) -> Self {
        PersistenceError::IoError(err)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::SerdeError(err)
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::IoError(e) => write!(f, "io error: {}", e),
            PersistenceError::SerdeError(e) => write!(f, "malformed library data: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::IoError(e) => Some(e),
            PersistenceError::SerdeError(e) => Some(e),
        }
    }
}

/// Durable storage behind an [`AlbumStore`](super::AlbumStore).
///
/// `load` runs once when the store is opened; `commit` receives the complete
/// collection after every mutation.
pub trait Persistence {
    fn load(&self) -> impl Future<Output = Result<Vec<Album>, PersistenceError>> + Send;

    fn commit(
        &self,
        albums: &[Album],
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

/// Keeps the library as a pretty-printed JSON array in a single file.
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "albums.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Persistence for JsonFilePersistence {
    async fn load(&self) -> Result<Vec<Album>, PersistenceError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // nothing committed yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::IoError(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let albums: Vec<Album> = serde_json::from_str(&content)?;
        Ok(albums)
    }

    async fn commit(&self, albums: &[Album]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(albums)?;
        let staging = self.staging_path();
        async_fs::write(&staging, json).await?;
        async_fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

/// Non-durable binding: hands out an optional seed on load and drops every
/// commit.
#[derive(Default)]
pub struct MemoryPersistence {
    seed: Vec<Album>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_albums(seed: Vec<Album>) -> Self {
        Self { seed }
    }
}

impl Persistence for MemoryPersistence {
    async fn load(&self) -> Result<Vec<Album>, PersistenceError> {
        Ok(self.seed.clone())
    }

    async fn commit(&self, _albums: &[Album]) -> Result<(), PersistenceError> {
        Ok(())
    }
}
