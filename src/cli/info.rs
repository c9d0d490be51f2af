use std::path::Path;

use tokio::sync::broadcast::{Receiver, error::TryRecvError};

use crate::{
    info,
    management::{AlbumStore, Persistence},
    types::AlbumEvent,
    utils, warning,
};

/// Prints where the shelf lives and how much is on it.
///
/// `library` is `None` when running against the in-memory shelf.
pub fn info<P: Persistence>(store: &AlbumStore<P>, library: Option<&Path>) {
    match library {
        Some(path) => info!("Library file: {}", path.display()),
        None => info!("Library: in-memory (changes are not saved)"),
    }
    info!("Albums on the shelf: {}", store.len());
}

/// Drains the change events a command produced and reports them.
pub fn report_changes(events: &mut Receiver<AlbumEvent>) {
    loop {
        match events.try_recv() {
            Ok(AlbumEvent::Added(album)) => {
                info!("+ {} {}", utils::short_id(&album.id), album.title)
            }
            Ok(AlbumEvent::Updated(album)) => {
                info!("~ {} {}", utils::short_id(&album.id), album.title)
            }
            Ok(AlbumEvent::Removed(album)) => {
                info!("- {} {}", utils::short_id(&album.id), album.title)
            }
            Err(TryRecvError::Lagged(missed)) => {
                warning!("{} change notifications were dropped.", missed)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}
