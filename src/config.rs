//! Configuration management for albumshelf.
//!
//! Values come from environment variables, optionally pre-populated from a
//! `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Overrides the location of the library file.
pub const LIBRARY_PATH_VAR: &str = "ALBUMSHELF_LIBRARY_PATH";

const APP_DIR: &str = "albumshelf";
const LIBRARY_FILE: &str = "albums.json";

/// Platform specific data directory of the application.
///
/// - Linux: `~/.local/share/albumshelf`
/// - macOS: `~/Library/Application Support/albumshelf`
/// - Windows: `%LOCALAPPDATA%/albumshelf`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from `albumshelf/.env` in the local data
/// directory.
///
/// The directory is created if it doesn't exist. A missing `.env` file is not
/// an error; a file that cannot be parsed is.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the path of the JSON library file.
///
/// Uses `ALBUMSHELF_LIBRARY_PATH` when set and non-empty, otherwise
/// `albums.json` inside [`data_dir`].
pub fn library_path() -> PathBuf {
    match env::var(LIBRARY_PATH_VAR) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => data_dir().join(LIBRARY_FILE),
    }
}
