use std::collections::HashMap;
use std::sync::RwLock;

use posha_core::errors::PoshaResult;
use posha_core::traits::IKeyValueStore;

use crate::lock_poisoned;

/// Process-local backend. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IKeyValueStore for InMemoryBackend {
    fn get(&self, key: &str) -> PoshaResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| lock_poisoned("memory backend"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PoshaResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_poisoned("memory backend"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PoshaResult<bool> {
        let mut entries = self.entries.write().map_err(|_| lock_poisoned("memory backend"))?;
        Ok(entries.remove(key).is_some())
    }

    fn keys(&self) -> PoshaResult<Vec<String>> {
        let entries = self.entries.read().map_err(|_| lock_poisoned("memory backend"))?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
