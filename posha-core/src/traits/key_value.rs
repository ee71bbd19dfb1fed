use crate::errors::PoshaResult;

/// A string key-value backend holding JSON-encoded values.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PoshaResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PoshaResult<()>;
    /// Remove a key. Returns whether it existed.
    fn remove(&self, key: &str) -> PoshaResult<bool>;
    /// All keys, sorted.
    fn keys(&self) -> PoshaResult<Vec<String>>;
}
