//! The reconciliation pass: diff one extraction against the known set.

use crate::{Extraction, KnownShows, ShowRecord};

/// Diff the current extraction against the known set.
///
/// Walks `current` in page order. Keys already in `known` are skipped —
/// re-scraping an already-known show never re-notifies, across any number of
/// cycles or restarts. Unknown keys are appended to the returned batch and
/// recorded in `known`, so the batch holds exactly the shows discovered this
/// cycle, in the order they appeared on the page.
///
/// Pure and synchronous: no I/O, no suspension points. The caller owns both
/// the extraction and the known set; persistence happens elsewhere.
///
/// # Examples
///
/// ```
/// use stagewatch_core::{Extraction, KnownShows, ShowRecord, reconcile};
///
/// let extraction: Extraction = [ShowRecord::new(
///     "12/31/24".to_string(),
///     "Tue".to_string(),
///     "Main Hall".to_string(),
///     "21:00".to_string(),
///     None,
///     None,
/// )]
/// .into_iter()
/// .collect();
///
/// let mut known = KnownShows::default();
/// assert_eq!(reconcile(&extraction, &mut known).len(), 1);
/// assert_eq!(reconcile(&extraction, &mut known).len(), 0);
/// ```
pub fn reconcile(current: &Extraction, known: &mut KnownShows) -> Vec<ShowRecord> {
    let mut fresh = Vec::new();

    for (date, record) in current.iter() {
        if known.contains(date) {
            continue;
        }
        known.insert(record.clone());
        fresh.push(record.clone());
    }

    fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> ShowRecord {
        ShowRecord::new(
            date.to_string(),
            "Mon".to_string(),
            "Hall".to_string(),
            "20:00".to_string(),
            None,
            None,
        )
    }

    fn extraction(dates: &[&str]) -> Extraction {
        dates.iter().map(|date| record(date)).collect()
    }

    #[test]
    fn empty_extraction_discovers_nothing() {
        let mut known = KnownShows::default();
        known.insert(record("1/1/25"));

        let fresh = reconcile(&Extraction::new(), &mut known);

        assert!(fresh.is_empty());
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn first_sighting_lands_in_batch_and_known_set() {
        let current = extraction(&["2024-01-01"]);
        let mut known = KnownShows::default();

        let fresh = reconcile(&current, &mut known);

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].date, "2024-01-01");
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn rerun_with_same_extraction_is_silent() {
        let current = extraction(&["2024-01-01"]);
        let mut known = KnownShows::default();

        reconcile(&current, &mut known);
        let second = reconcile(&current, &mut known);

        assert!(second.is_empty());
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn only_unknown_entries_are_discovered() {
        let current = extraction(&["1/1/25", "2/1/25"]);
        let mut known = KnownShows::default();
        known.insert(record("1/1/25"));

        let fresh = reconcile(&current, &mut known);

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].date, "2/1/25");
        assert_eq!(known.len(), 2);
    }

    #[test]
    fn batch_preserves_page_order() {
        let current = extraction(&["5/1/25", "3/1/25", "4/1/25", "1/1/25"]);
        let mut known = KnownShows::default();
        known.insert(record("3/1/25"));

        let fresh = reconcile(&current, &mut known);
        let dates: Vec<&str> = fresh.iter().map(|show| show.date.as_str()).collect();

        assert_eq!(dates, vec!["5/1/25", "4/1/25", "1/1/25"]);
    }

    #[test]
    fn known_set_grows_by_exactly_the_batch() {
        let current = extraction(&["1/1/25", "2/1/25", "3/1/25"]);
        let mut known = KnownShows::default();
        known.insert(record("2/1/25"));
        let before = known.len();

        let fresh = reconcile(&current, &mut known);

        assert_eq!(known.len(), before + fresh.len());
    }

    #[test]
    fn all_known_yields_empty_batch() {
        let current = extraction(&["1/1/25", "2/1/25"]);
        let mut known = KnownShows::default();
        known.insert(record("1/1/25"));
        known.insert(record("2/1/25"));

        assert!(reconcile(&current, &mut known).is_empty());
        assert_eq!(known.len(), 2);
    }

    #[test]
    fn reconcile_never_rewrites_a_known_record() {
        let mut known = KnownShows::default();
        known.insert(record("1/1/25"));

        let mut changed = record("1/1/25");
        changed.location = "Somewhere else".to_string();
        let current: Extraction = [changed].into_iter().collect();

        reconcile(&current, &mut known);

        assert_eq!(known.get("1/1/25").unwrap().location, "Hall");
    }
}
