//! # CLI Module
//!
//! The presentation layer of albumshelf. Each command reads the album store's
//! current snapshot or issues one store operation, then reports the outcome
//! with the crate's output macros.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Album Store (Authoritative Collection, Change Events)
//!     ↓
//! Persistence (JSON File / In-Memory)
//! ```
//!
//! Edits go through a draft: the album is copied into an
//! [`AlbumDraft`](crate::types::AlbumDraft), the given fields are applied to
//! the copy, and only the finished draft is submitted to the store.
//!
//! ## Usage
//!
//! ```bash
//! albumshelf add --title "OK Computer" --artist Radiohead --year 1997
//! albumshelf list --search radio
//! albumshelf edit 3f2a --format Vinyl
//! albumshelf remove 3f2a
//! ```

mod albums;
mod info;

pub use albums::AlbumFields;
pub use albums::ImportSummary;
pub use albums::add_album;
pub use albums::edit_album;
pub use albums::export_albums;
pub use albums::import_albums;
pub use albums::import_records;
pub use albums::list_albums;
pub use albums::remove_album;
pub use albums::seed_albums;
pub use info::info;
pub use info::report_changes;
