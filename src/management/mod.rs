mod persistence;
mod store;

pub use persistence::JsonFilePersistence;
pub use persistence::MemoryPersistence;
pub use persistence::Persistence;
pub use persistence::PersistenceError;
pub use store::AlbumStore;
pub use store::StoreError;
