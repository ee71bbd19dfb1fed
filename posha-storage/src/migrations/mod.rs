//! Schema migrations, applied in order and recorded in `schema_version`.

pub mod v001_initial_schema;

use rusqlite::{params, Connection};
use tracing::info;

use posha_core::errors::{PoshaError, PoshaResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> PoshaResult<()>;

/// Every migration, by version. Append only.
const MIGRATIONS: &[(u32, MigrationFn)] = &[(1, v001_initial_schema::migrate)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> PoshaResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration {version} begin: {e}")))?;
        migrate(&tx).map_err(|e| migration_failed(version, e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| migration_failed(version, e.to_string()))?;
        tx.commit()
            .map_err(|e| migration_failed(version, e.to_string()))?;
        info!(version, "applied schema migration");
    }
    current_version(conn)
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> PoshaResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn migration_failed(version: u32, reason: String) -> PoshaError {
    PoshaError::Storage(StorageError::MigrationFailed { version, reason })
}
