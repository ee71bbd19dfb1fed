//! Insertion-ordered tag → count mapping.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FrequencyEntry;

/// Counts per tag, kept in the order each tag was first seen.
///
/// Serializes as a JSON object whose key order matches first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTally {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl TagTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `tag`.
    pub fn increment(&mut self, tag: &str) {
        self.add(tag, 1);
    }

    fn add(&mut self, tag: &str, count: usize) {
        match self.index.get(tag) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.index.insert(tag.to_string(), self.entries.len());
                self.entries.push(FrequencyEntry::new(tag, count));
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.count))
    }

    /// Entries sorted by count descending; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<FrequencyEntry> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, so equal counts stay in insertion order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The highest-count tag; the earliest seen wins a tie.
    pub fn top(&self) -> Option<&FrequencyEntry> {
        self.entries
            .iter()
            .fold(None, |best: Option<&FrequencyEntry>, entry| match best {
                Some(b) if b.count >= entry.count => Some(b),
                _ => Some(entry),
            })
    }
}

impl<'a> FromIterator<&'a str> for TagTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = TagTally::new();
        for tag in iter {
            tally.increment(tag);
        }
        tally
    }
}

impl Serialize for TagTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagTally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = TagTally;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of tag to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TagTally, A::Error> {
                let mut tally = TagTally::new();
                while let Some((tag, count)) = access.next_entry::<String, usize>()? {
                    tally.add(&tag, count);
                }
                Ok(tally)
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_preserves_first_seen_order() {
        let tally: TagTally = ["Work", "Casual", "Work", "Formal"].into_iter().collect();
        let order: Vec<&str> = tally.iter().map(|(tag, _)| tag).collect();
        assert_eq!(order, vec!["Work", "Casual", "Formal"]);
        assert_eq!(tally.get("Work"), Some(2));
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn top_prefers_earliest_on_tie() {
        let tally: TagTally = ["Casual", "Work", "Work", "Casual"].into_iter().collect();
        assert_eq!(tally.top().map(|e| e.name.as_str()), Some("Casual"));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let tally: TagTally = ["Rainy", "Hot", "Rainy"].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"Rainy":2,"Hot":1}"#);

        let back: TagTally = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tally);
    }
}
