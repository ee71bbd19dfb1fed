/// Storage-layer errors for the key-value backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("storage lock poisoned: {resource}")]
    LockPoisoned { resource: String },
}
