//! Get, upsert, delete, and list rows of `kv_entries`.

use rusqlite::{params, Connection, OptionalExtension};

use posha_core::errors::PoshaResult;

use crate::to_storage_err;

pub fn get_value(conn: &Connection, key: &str) -> PoshaResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_entries WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert or replace the value under `key`, bumping `updated_at`.
pub fn upsert_value(conn: &Connection, key: &str, value: &str) -> PoshaResult<()> {
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![key, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> PoshaResult<bool> {
    let removed = conn
        .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(removed > 0)
}

pub fn list_keys(conn: &Connection) -> PoshaResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT key FROM kv_entries ORDER BY key")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut keys = Vec::new();
    for row in rows {
        keys.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(keys)
}
