//! # posha-storage
//!
//! Persistence for the wardrobe: a JSON-valued key-value backend (SQLite or
//! in-memory) and [`WardrobeStore`], which keeps outfits, closet items,
//! preferences, and skin tone on top of any backend.

pub mod backend;
pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use backend::{InMemoryBackend, SqliteBackend};
pub use store::WardrobeStore;

use posha_core::errors::{PoshaError, StorageError};

/// Wrap a backend failure message as a [`PoshaError`].
pub(crate) fn to_storage_err(message: String) -> PoshaError {
    PoshaError::Storage(StorageError::SqliteError { message })
}

/// A poisoned lock means a writer panicked mid-update.
pub(crate) fn lock_poisoned(resource: &str) -> PoshaError {
    PoshaError::Storage(StorageError::LockPoisoned {
        resource: resource.to_string(),
    })
}
