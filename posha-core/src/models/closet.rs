use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{LEGACY_ITEM_ID_PREFIX, UNIDENTIFIED_ITEM_ID_PREFIX};

/// A closet item in its normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClosetItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    /// Image reference (URL or data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl ClosetItem {
    /// A name-only item, as produced by the quick-add path.
    pub fn named(id: String, name: String) -> Self {
        Self {
            id,
            name,
            category: None,
            color: None,
            fabric: None,
            image: None,
            added_at: None,
        }
    }

    /// True when this item was normalized from a plain-string entry.
    pub fn is_legacy(&self) -> bool {
        self.id.starts_with(LEGACY_ITEM_ID_PREFIX)
    }
}

/// The object form of a stored closet entry. Every field except `name` may
/// be missing in older data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredItem {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "addedAt", alias = "added_at")]
    pub added_at: Option<DateTime<Utc>>,
}

/// A closet entry exactly as persisted: either a bare name (legacy) or an
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredClosetEntry {
    Legacy(String),
    Structured(StructuredItem),
}

impl StoredClosetEntry {
    /// Collapse either form into a [`ClosetItem`].
    ///
    /// Legacy names get the id `legacy:<name>`. Objects without an id get
    /// `unidentified:<name>` and are not counted as legacy.
    pub fn normalize(self) -> ClosetItem {
        match self {
            StoredClosetEntry::Legacy(name) => {
                ClosetItem::named(format!("{LEGACY_ITEM_ID_PREFIX}{name}"), name)
            }
            StoredClosetEntry::Structured(item) => {
                let id = match item.id {
                    Some(serde_json::Value::String(s)) if !s.is_empty() => s,
                    Some(serde_json::Value::Number(n)) => n.to_string(),
                    _ => format!("{UNIDENTIFIED_ITEM_ID_PREFIX}{}", item.name),
                };
                ClosetItem {
                    id,
                    name: item.name,
                    category: empty_to_none(item.category),
                    color: empty_to_none(item.color),
                    fabric: empty_to_none(item.fabric),
                    image: empty_to_none(item.image),
                    added_at: item.added_at,
                }
            }
        }
    }
}

fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A fully described item submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewClosetItem {
    pub name: String,
    pub category: Option<String>,
    pub color: Option<String>,
    pub fabric: Option<String>,
    pub image: Option<String>,
}

/// Partial update; `Some` fields replace the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosetItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub fabric: Option<String>,
    pub image: Option<String>,
}

impl ClosetItemUpdate {
    pub fn apply(&self, item: &mut ClosetItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = Some(category.clone());
        }
        if let Some(color) = &self.color {
            item.color = Some(color.clone());
        }
        if let Some(fabric) = &self.fabric {
            item.fabric = Some(fabric.clone());
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
    }
}
