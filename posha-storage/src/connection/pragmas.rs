//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode (when enabled), NORMAL sync, busy_timeout from config.

use rusqlite::Connection;

use posha_core::config::StorageConfig;
use posha_core::errors::PoshaResult;

use crate::to_storage_err;

/// Apply journal, sync, and timeout pragmas to a connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> PoshaResult<()> {
    let journal_mode = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal_mode};
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {};
        ",
        config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> PoshaResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
