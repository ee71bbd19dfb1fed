//! v001: key-value table backing the wardrobe store.

use rusqlite::Connection;

use posha_core::errors::PoshaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> PoshaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_entries (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
