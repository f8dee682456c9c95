//! File-backed persistence of the known-show set.

use stagewatch_core::KnownShows;
use stagewatch_error::{StagewatchResult, StoreError, StoreErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// File-backed store for the known-show set.
///
/// The store never interprets the mapping — it round-trips whatever the
/// engine hands it. There is exactly one writer (the watcher's single
/// execution context), so the temp-file + rename dance only has to protect
/// readers from partial writes, not writers from each other.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted known-show set.
    ///
    /// Any failure — missing file, unreadable file, unparseable contents —
    /// degrades to an empty set. A missing file is the normal first-run
    /// state and logs at INFO; everything else warns.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> KnownShows {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No persisted state, starting with an empty known set");
                return KnownShows::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read state file, starting empty");
                return KnownShows::default();
            }
        };

        match serde_json::from_slice::<KnownShows>(&bytes) {
            Ok(known) => {
                debug!(shows = known.len(), "Loaded persisted state");
                known
            }
            Err(e) => {
                warn!(error = %e, "State file is not valid JSON, starting empty");
                KnownShows::default()
            }
        }
    }

    /// Persist the full known-show set atomically.
    ///
    /// Serializes the mapping, writes it to a temp file beside the target,
    /// then renames into place. Parent directories are created on demand.
    #[instrument(skip(self, known), fields(path = %self.path.display(), shows = known.len()))]
    pub async fn save(&self, known: &KnownShows) -> StagewatchResult<()> {
        let json = serde_json::to_vec_pretty(known)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialize(e.to_string())))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                        "{}: {}",
                        parent.display(),
                        e
                    )))
                })?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::Rename(format!(
                "{} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        debug!("Persisted known-show state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagewatch_core::ShowRecord;

    fn known(dates: &[&str]) -> KnownShows {
        let mut known = KnownShows::default();
        for date in dates {
            known.insert(ShowRecord::new(
                date.to_string(),
                "Mon".to_string(),
                "Hall".to_string(),
                "20:00".to_string(),
                None,
                None,
            ));
        }
        known
    }

    #[tokio::test]
    async fn round_trips_the_known_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("known-shows.json"));

        let mut original = known(&["1/1/25", "2/1/25"]);
        original.insert(ShowRecord::new(
            "3/1/25".to_string(),
            "Wed".to_string(),
            "Club".to_string(),
            "21:30".to_string(),
            Some("https://tickets.example.com/3".to_string()),
            Some("Buy".to_string()),
        ));

        store.save(&original).await.unwrap();
        let loaded = store.load().await;

        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("never-written.json"));

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("known-shows.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = StateStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nested/state/known-shows.json"));

        store.save(&known(&["1/1/25"])).await.unwrap();

        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_previous_state_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("known-shows.json"));

        store.save(&known(&["1/1/25"])).await.unwrap();
        store.save(&known(&["1/1/25", "2/1/25"])).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 2);
        assert!(!dir.path().join("known-shows.tmp").exists());
    }
}
