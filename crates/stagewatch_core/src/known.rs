//! The durable set of every show seen so far.

use crate::ShowRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every show the watcher has ever seen, keyed by raw date text.
///
/// Append-only: once a key is known it is never removed, and the first-seen
/// record for a key is authoritative — re-scraping the same date with
/// different cell text never rewrites history. Serializes transparently as a
/// plain JSON object so the state file stays a flat `date → record` mapping,
/// and `BTreeMap` keeps the serialized key order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownShows {
    shows: BTreeMap<String, ShowRecord>,
}

impl KnownShows {
    /// Whether a show with this date key has been seen before.
    pub fn contains(&self, date: &str) -> bool {
        self.shows.contains_key(date)
    }

    /// Record a show as seen.
    ///
    /// Returns `true` when the key was new. An already-known key is left
    /// untouched and `false` is returned.
    pub fn insert(&mut self, record: ShowRecord) -> bool {
        match self.shows.entry(record.date.clone()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// The stored record for a date key, if seen before.
    pub fn get(&self, date: &str) -> Option<&ShowRecord> {
        self.shows.get(date)
    }

    /// Number of shows seen across all cycles.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether nothing has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, location: &str) -> ShowRecord {
        ShowRecord::new(
            date.to_string(),
            "Thu".to_string(),
            location.to_string(),
            "20:00".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn first_seen_record_is_authoritative() {
        let mut known = KnownShows::default();
        assert!(known.insert(record("1/1/25", "original")));
        assert!(!known.insert(record("1/1/25", "changed")));

        assert_eq!(known.get("1/1/25").unwrap().location, "original");
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn serializes_as_flat_date_keyed_object() {
        let mut known = KnownShows::default();
        known.insert(record("1/1/25", "Hall"));

        let json = serde_json::to_value(&known).unwrap();
        assert!(json.get("1/1/25").is_some());
        assert_eq!(json["1/1/25"]["location"], "Hall");
    }
}
