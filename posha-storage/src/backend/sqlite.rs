//! SqliteBackend: owns the connection, runs migrations on open.

use std::path::Path;

use posha_core::config::StorageConfig;
use posha_core::errors::PoshaResult;
use posha_core::traits::IKeyValueStore;

use crate::connection::WriteConnection;
use crate::migrations;
use crate::queries::kv_ops;

pub struct SqliteBackend {
    conn: WriteConnection,
    schema_version: u32,
}

impl SqliteBackend {
    /// Open a backend at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> PoshaResult<Self> {
        let conn = WriteConnection::open(Path::new(&config.db_path), config)?;
        Self::initialize(conn)
    }

    /// Open a backend backed by a file on disk, default pragmas.
    pub fn open(path: &Path) -> PoshaResult<Self> {
        let conn = WriteConnection::open(path, &StorageConfig::default())?;
        Self::initialize(conn)
    }

    /// Open an in-memory backend (for testing).
    pub fn open_in_memory() -> PoshaResult<Self> {
        let conn = WriteConnection::open_in_memory(&StorageConfig::default())?;
        Self::initialize(conn)
    }

    fn initialize(conn: WriteConnection) -> PoshaResult<Self> {
        let schema_version = conn.with_conn(migrations::run_migrations)?;
        tracing::debug!(schema_version, "sqlite backend ready");
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Schema version after migrations ran.
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Whether the connection is in WAL journal mode.
    pub fn is_wal(&self) -> PoshaResult<bool> {
        self.conn
            .with_conn(crate::connection::pragmas::verify_wal_mode)
    }
}

impl IKeyValueStore for SqliteBackend {
    fn get(&self, key: &str) -> PoshaResult<Option<String>> {
        self.conn.with_conn(|conn| kv_ops::get_value(conn, key))
    }

    fn set(&self, key: &str, value: &str) -> PoshaResult<()> {
        self.conn.with_conn(|conn| kv_ops::upsert_value(conn, key, value))
    }

    fn remove(&self, key: &str) -> PoshaResult<bool> {
        self.conn.with_conn(|conn| kv_ops::delete_value(conn, key))
    }

    fn keys(&self) -> PoshaResult<Vec<String>> {
        self.conn.with_conn(kv_ops::list_keys)
    }
}
