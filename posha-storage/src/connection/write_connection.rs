//! Single connection behind a mutex. Serialized access, no contention
//! between readers and writers at this scale.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use posha_core::config::StorageConfig;
use posha_core::errors::PoshaResult;

use super::pragmas::apply_pragmas;
use crate::{lock_poisoned, to_storage_err};

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, config: &StorageConfig) -> PoshaResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(config: &StorageConfig) -> PoshaResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> PoshaResult<T>
    where
        F: FnOnce(&Connection) -> PoshaResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| lock_poisoned("sqlite connection"))?;
        f(&guard)
    }
}
