use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Stands in for a timestamp that was missing or unreadable in storage.
/// Such records still count toward frequencies but never toward a time window.
pub const UNKNOWN_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// A single logged outfit. Created once, never mutated.
///
/// Deserialization is lenient field by field: a missing or malformed field
/// contributes nothing instead of rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutfitRecord {
    /// Unique id assigned when the outfit is logged. Empty if storage lost it.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    /// When the outfit was logged, or [`UNKNOWN_TIMESTAMP`].
    #[serde(default = "unknown_timestamp", deserialize_with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Color names worn. Repeats are meaningful and counted individually.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub fabrics: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub occasion: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub weather: Option<String>,
}

impl OutfitRecord {
    /// Occasion tag, treating an empty string as untagged.
    pub fn occasion_tag(&self) -> Option<&str> {
        non_empty(self.occasion.as_deref())
    }

    /// Weather tag, treating an empty string as untagged.
    pub fn weather_tag(&self) -> Option<&str> {
        non_empty(self.weather.as_deref())
    }

    /// False when the stored timestamp was missing or unreadable.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp != UNKNOWN_TIMESTAMP
    }
}

/// The caller-supplied part of an outfit; the store assigns id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewOutfit {
    pub colors: Vec<String>,
    pub fabrics: Vec<String>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
}

impl NewOutfit {
    /// Stamp this outfit into a record.
    pub fn into_record(self, id: String, timestamp: DateTime<Utc>) -> OutfitRecord {
        OutfitRecord {
            id,
            timestamp,
            colors: self.colors,
            fabrics: self.fabrics,
            occasion: self.occasion,
            weather: self.weather,
        }
    }
}

fn non_empty(tag: Option<&str>) -> Option<&str> {
    tag.filter(|t| !t.is_empty())
}

fn unknown_timestamp() -> DateTime<Utc> {
    UNKNOWN_TIMESTAMP
}

/// Older stores wrote numeric millisecond ids.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// RFC 3339 text or epoch milliseconds; anything else is unknown.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    Ok(parsed.unwrap_or(UNKNOWN_TIMESTAMP))
}

/// A list of tag strings. `null` or a non-list is empty; non-string
/// elements are dropped.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A single tag string; anything else is untagged.
fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_timestamp_is_flagged() {
        let record: OutfitRecord = serde_json::from_str(r#"{"colors":["Red"]}"#).unwrap();
        assert!(!record.has_timestamp());
        assert_eq!(record.timestamp, UNKNOWN_TIMESTAMP);
    }
}
