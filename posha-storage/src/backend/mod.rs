//! Key-value backends implementing [`IKeyValueStore`](posha_core::traits::IKeyValueStore).

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryBackend;
pub use sqlite::SqliteBackend;
