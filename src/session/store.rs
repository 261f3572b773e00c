//! Score persistence
//!
//! The session only needs to load and save one cumulative counter; the backing
//! store is opaque behind `ScoreStore`.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key under which the cumulative score is stored
pub const TOTAL_SCORE_KEY: &str = "total_score";

/// Error type for score persistence
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Score store I/O error: {e}"),
            Self::Serialize(e) => write!(f, "Score store encoding error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Key-value store for integer counters
pub trait ScoreStore {
    fn load(&self, key: &str) -> Option<u64>;

    /// # Errors
    ///
    /// Returns `StoreError` if the value could not be persisted.
    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn load(&self, key: &str) -> Option<u64> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// In-process store; forgets everything on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, u64>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object file
///
/// A missing or unreadable file loads as empty; every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, u64>,
}

impl JsonFileStore {
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring corrupt score file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read score file");
                BTreeMap::new()
            }
        };

        debug!(path = %path.display(), keys = values.len(), "opened score file");
        Self { path, values }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(TOTAL_SCORE_KEY), None);
        store.save(TOTAL_SCORE_KEY, 1500).unwrap();
        assert_eq!(store.load(TOTAL_SCORE_KEY), Some(1500));
    }

    #[test]
    fn json_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.load(TOTAL_SCORE_KEY), None);
        store.save(TOTAL_SCORE_KEY, 850).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.load(TOTAL_SCORE_KEY), Some(850));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn json_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.load(TOTAL_SCORE_KEY), None);
    }

    #[test]
    fn json_store_save_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("missing").join("scores.json"));
        assert!(matches!(
            store.save(TOTAL_SCORE_KEY, 1),
            Err(StoreError::Io(_))
        ));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
        store.save("k", 7).unwrap();
        assert_eq!(store.load("k"), Some(7));
    }
}
