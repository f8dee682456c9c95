//! The ordered result of one scrape cycle.

use crate::ShowRecord;
use indexmap::IndexMap;

/// The mapping produced by one scrape, keyed by raw date text.
///
/// Iteration order is insertion order, which is the order rows appeared on
/// the page — the notifier announces shows in exactly this order, so the
/// extraction must never re-sort them.
///
/// # Examples
///
/// ```
/// use stagewatch_core::{Extraction, ShowRecord};
///
/// let mut extraction = Extraction::new();
/// let inserted = extraction.insert(ShowRecord::new(
///     "12/31/24".to_string(),
///     "Tue".to_string(),
///     "Main Hall".to_string(),
///     "21:00".to_string(),
///     None,
///     None,
/// ));
/// assert!(inserted);
/// assert_eq!(extraction.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    shows: IndexMap<String, ShowRecord>,
}

impl Extraction {
    /// Create an empty extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its date key.
    ///
    /// The first record for a key wins: inserting a duplicate date returns
    /// `false` and leaves the stored record untouched. The extractor logs
    /// duplicates; they never reach the reconciliation engine.
    pub fn insert(&mut self, record: ShowRecord) -> bool {
        if self.shows.contains_key(&record.date) {
            return false;
        }
        self.shows.insert(record.date.clone(), record);
        true
    }

    /// Whether a show with this date key was scraped.
    pub fn contains(&self, date: &str) -> bool {
        self.shows.contains_key(date)
    }

    /// Iterate entries in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShowRecord)> {
        self.shows.iter().map(|(date, record)| (date.as_str(), record))
    }

    /// Number of scraped shows.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether the extraction holds no shows.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl FromIterator<ShowRecord> for Extraction {
    fn from_iter<I: IntoIterator<Item = ShowRecord>>(records: I) -> Self {
        let mut extraction = Self::new();
        for record in records {
            extraction.insert(record);
        }
        extraction
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
    fn iteration_preserves_insertion_order() {
        let extraction: Extraction =
            [record("3/1/25", "A"), record("1/1/25", "B"), record("2/1/25", "C")]
                .into_iter()
                .collect();

        let dates: Vec<&str> = extraction.iter().map(|(date, _)| date).collect();
        assert_eq!(dates, vec!["3/1/25", "1/1/25", "2/1/25"]);
    }

    #[test]
    fn first_record_for_a_date_wins() {
        let mut extraction = Extraction::new();
        assert!(extraction.insert(record("1/1/25", "first")));
        assert!(!extraction.insert(record("1/1/25", "second")));

        assert_eq!(extraction.len(), 1);
        let (_, stored) = extraction.iter().next().unwrap();
        assert_eq!(stored.location, "first");
    }
}
