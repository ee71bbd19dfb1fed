//! WardrobeStore: outfits, closet, preferences, and skin tone kept as JSON
//! values in any [`IKeyValueStore`].
//!
//! Reads never fail on bad data. A missing key yields the configured default;
//! an unparseable value is logged and treated as missing; a single bad
//! element inside a list is logged and skipped.
//!
//! Writes never lose bad data. List mutations edit the stored JSON elements
//! in place, so entries this version cannot read are written back untouched.
//! A stored value that is not a list at all is copied to its
//! `<key>:unreadable` backup before being replaced.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use posha_core::config::ProfileConfig;
use posha_core::constants::storage_keys;
use posha_core::errors::{PoshaError, PoshaResult};
use posha_core::models::{
    ClosetItem, ClosetItemUpdate, NewClosetItem, NewOutfit, OutfitRecord, StoredClosetEntry,
};
use posha_core::store_span;
use posha_core::traits::{IKeyValueStore, IWardrobeStore};

use crate::lock_poisoned;

pub struct WardrobeStore<B: IKeyValueStore> {
    backend: B,
    profile: ProfileConfig,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl<B: IKeyValueStore> WardrobeStore<B> {
    pub fn new(backend: B, profile: ProfileConfig) -> Self {
        Self {
            backend,
            profile,
            write_lock: Mutex::new(()),
        }
    }

    /// A store using the compiled profile defaults.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, ProfileConfig::default())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn lock(&self) -> PoshaResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| lock_poisoned("wardrobe store"))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> PoshaResult<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "stored value is not valid, using default");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> PoshaResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Decode each element of a stored list on its own so one bad element
    /// does not hide the rest.
    fn read_list<T, F>(&self, key: &str, decode: F) -> PoshaResult<Vec<T>>
    where
        F: Fn(Value) -> Result<T, serde_json::Error>,
    {
        let values: Vec<Value> = self.read_json(key)?.unwrap_or_default();
        let mut items = Vec::with_capacity(values.len());
        for (position, value) in values.into_iter().enumerate() {
            match decode(value) {
                Ok(item) => items.push(item),
                Err(e) => warn!(key, position, error = %e, "skipping unreadable entry"),
            }
        }
        Ok(items)
    }

    /// The stored list elements for a read-modify-write cycle, or `None` if
    /// the key is absent. Call with the write lock held.
    fn list_for_update(&self, key: &str) -> PoshaResult<Option<Vec<Value>>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(values) => Ok(Some(values)),
            Err(e) => {
                let backup = storage_keys::unreadable_backup(key);
                warn!(key, %backup, error = %e, "stored list is unreadable, backing it up");
                self.backend.set(&backup, &raw)?;
                Ok(None)
            }
        }
    }

    fn load_outfits(&self) -> PoshaResult<Vec<OutfitRecord>> {
        self.read_list(storage_keys::OUTFITS, serde_json::from_value)
    }

    fn load_closet(&self) -> PoshaResult<Vec<ClosetItem>> {
        self.read_list(storage_keys::CLOSET, |value| {
            serde_json::from_value::<StoredClosetEntry>(value).map(StoredClosetEntry::normalize)
        })
    }

    fn load_preferences(&self) -> PoshaResult<Vec<String>> {
        Ok(self
            .read_json(storage_keys::PREFERENCES)?
            .unwrap_or_else(|| self.profile.default_preferences.clone()))
    }
}

/// The normalized item behind a stored closet element, if it is readable.
fn closet_entry(value: &Value) -> Option<ClosetItem> {
    serde_json::from_value::<StoredClosetEntry>(value.clone())
        .ok()
        .map(StoredClosetEntry::normalize)
}

fn require_non_blank(value: &str, what: &str) -> PoshaResult<()> {
    if value.trim().is_empty() {
        return Err(PoshaError::InvalidArgument {
            reason: format!("{what} must not be blank"),
        });
    }
    Ok(())
}

impl<B: IKeyValueStore> IWardrobeStore for WardrobeStore<B> {
    fn outfits(&self) -> PoshaResult<Vec<OutfitRecord>> {
        self.load_outfits()
    }

    fn log_outfit_at(&self, outfit: NewOutfit, at: DateTime<Utc>) -> PoshaResult<OutfitRecord> {
        let _span = store_span!("log_outfit").entered();
        let _guard = self.lock()?;
        let record = outfit.into_record(Uuid::new_v4().to_string(), at);
        let mut outfits = self
            .list_for_update(storage_keys::OUTFITS)?
            .unwrap_or_default();
        outfits.insert(0, serde_json::to_value(&record)?);
        self.write_json(storage_keys::OUTFITS, &outfits)?;
        debug!(id = %record.id, total = outfits.len(), "outfit logged");
        Ok(record)
    }

    fn closet(&self) -> PoshaResult<Vec<ClosetItem>> {
        self.load_closet()
    }

    fn add_closet_item(&self, name: &str) -> PoshaResult<bool> {
        let _span = store_span!("add_closet_item").entered();
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let _guard = self.lock()?;
        let mut closet = self
            .list_for_update(storage_keys::CLOSET)?
            .unwrap_or_default();
        if closet
            .iter()
            .filter_map(closet_entry)
            .any(|item| item.name == name)
        {
            debug!(name, "closet item already present");
            return Ok(false);
        }
        let created = ClosetItem::named(Uuid::new_v4().to_string(), name.to_string());
        closet.push(serde_json::to_value(&created)?);
        self.write_json(storage_keys::CLOSET, &closet)?;
        Ok(true)
    }

    fn add_closet_item_with_details(&self, item: NewClosetItem) -> PoshaResult<ClosetItem> {
        let _span = store_span!("add_closet_item_with_details").entered();
        require_non_blank(&item.name, "closet item name")?;
        let _guard = self.lock()?;
        let created = ClosetItem {
            id: Uuid::new_v4().to_string(),
            name: item.name.trim().to_string(),
            category: item.category,
            color: item.color,
            fabric: item.fabric,
            image: item.image,
            added_at: Some(Utc::now()),
        };
        let mut closet = self
            .list_for_update(storage_keys::CLOSET)?
            .unwrap_or_default();
        closet.push(serde_json::to_value(&created)?);
        self.write_json(storage_keys::CLOSET, &closet)?;
        Ok(created)
    }

    fn remove_closet_item(&self, id: &str) -> PoshaResult<bool> {
        let _span = store_span!("remove_closet_item").entered();
        let _guard = self.lock()?;
        let Some(mut closet) = self.list_for_update(storage_keys::CLOSET)? else {
            return Ok(false);
        };
        let before = closet.len();
        closet.retain(|value| closet_entry(value).map_or(true, |item| item.id != id));
        if closet.len() == before {
            return Ok(false);
        }
        self.write_json(storage_keys::CLOSET, &closet)?;
        Ok(true)
    }

    fn update_closet_item(&self, id: &str, update: &ClosetItemUpdate) -> PoshaResult<ClosetItem> {
        let _span = store_span!("update_closet_item").entered();
        if let Some(name) = &update.name {
            require_non_blank(name, "closet item name")?;
        }
        let _guard = self.lock()?;
        let not_found = || PoshaError::ItemNotFound { id: id.to_string() };
        let mut closet = self
            .list_for_update(storage_keys::CLOSET)?
            .ok_or_else(not_found)?;
        let (position, mut item) = closet
            .iter()
            .enumerate()
            .find_map(|(position, value)| {
                closet_entry(value)
                    .filter(|item| item.id == id)
                    .map(|item| (position, item))
            })
            .ok_or_else(not_found)?;
        update.apply(&mut item);
        closet[position] = serde_json::to_value(&item)?;
        self.write_json(storage_keys::CLOSET, &closet)?;
        Ok(item)
    }

    fn preferences(&self) -> PoshaResult<Vec<String>> {
        self.load_preferences()
    }

    fn set_preferences(&self, preferences: Vec<String>) -> PoshaResult<()> {
        let _guard = self.lock()?;
        self.write_json(storage_keys::PREFERENCES, &preferences)
    }

    fn toggle_preference(&self, tag: &str) -> PoshaResult<bool> {
        let _span = store_span!("toggle_preference").entered();
        require_non_blank(tag, "preference tag")?;
        let _guard = self.lock()?;
        let mut preferences = match self.list_for_update(storage_keys::PREFERENCES)? {
            Some(values) => values,
            None => self
                .profile
                .default_preferences
                .iter()
                .cloned()
                .map(Value::String)
                .collect(),
        };
        let stored = Value::String(tag.to_string());
        let enabled = if preferences.contains(&stored) {
            preferences.retain(|p| p != &stored);
            false
        } else {
            preferences.push(stored);
            true
        };
        self.write_json(storage_keys::PREFERENCES, &preferences)?;
        Ok(enabled)
    }

    fn skin_tone(&self) -> PoshaResult<String> {
        Ok(self
            .read_json(storage_keys::SKIN_TONE)?
            .unwrap_or_else(|| self.profile.default_skin_tone.clone()))
    }

    fn set_skin_tone(&self, tone: &str) -> PoshaResult<()> {
        require_non_blank(tone, "skin tone")?;
        let _guard = self.lock()?;
        self.write_json(storage_keys::SKIN_TONE, tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryBackend;

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let backend = InMemoryBackend::new();
        backend.set(storage_keys::PREFERENCES, "{not json").unwrap();
        let store = WardrobeStore::with_defaults(backend);
        assert_eq!(
            store.preferences().unwrap(),
            vec!["Minimalist".to_string(), "Sustainable".to_string()]
        );
    }

    #[test]
    fn unreadable_outfit_entries_are_skipped() {
        let backend = InMemoryBackend::new();
        backend
            .set(
                storage_keys::OUTFITS,
                r#"[
                    {"id":"good","timestamp":"2024-04-01T09:00:00Z","colors":["Sage"]},
                    {"id":"no-timestamp","colors":["Rose"]},
                    "garbage"
                ]"#,
            )
            .unwrap();
        let store = WardrobeStore::with_defaults(backend);
        let outfits = store.outfits().unwrap();
        assert_eq!(outfits.len(), 2);
        assert_eq!(outfits[0].id, "good");
        assert_eq!(outfits[1].id, "no-timestamp");
        assert!(!outfits[1].has_timestamp());
    }

    #[test]
    fn corrupt_list_is_backed_up_before_overwrite() {
        let backend = InMemoryBackend::new();
        backend.set(storage_keys::OUTFITS, "{not a list").unwrap();
        let store = WardrobeStore::with_defaults(backend);

        store.log_outfit(NewOutfit::default()).unwrap();

        let backup = storage_keys::unreadable_backup(storage_keys::OUTFITS);
        assert_eq!(
            store.backend().get(&backup).unwrap().as_deref(),
            Some("{not a list")
        );
        assert_eq!(store.outfits().unwrap().len(), 1);
    }

    #[test]
    fn toggle_keeps_non_string_preference_entries() {
        let backend = InMemoryBackend::new();
        backend
            .set(storage_keys::PREFERENCES, r#"["Vintage",42]"#)
            .unwrap();
        let store = WardrobeStore::with_defaults(backend);

        assert!(store.toggle_preference("Bold").unwrap());

        let raw = store.backend().get(storage_keys::PREFERENCES).unwrap().unwrap();
        assert_eq!(raw, r#"["Vintage",42,"Bold"]"#);
    }
}
