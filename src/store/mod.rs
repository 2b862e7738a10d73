use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// Persisted document keys. These names are the on-disk contract: each key
/// is stored as one JSON document at `<dir>/<key>.json`.
pub const DAILY_PRICES: &str = "daily_prices";
pub const LAST_INPUT_DATE: &str = "last_input_date";
pub const WAGES_LIST: &str = "wages_list";
pub const HISTORY: &str = "history";

/// Key-to-JSON-document store backed by one flat file per key.
///
/// Reads fall back to a caller-supplied default when a document is missing
/// or unparseable; writes are fire-and-forget. Single user, single process:
/// no locking, no atomic rename, each write replaces the whole document.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(JsonStore { dir })
    }

    /// Open the store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("karat");
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load the document under `key`. Missing and unparseable documents both
    /// yield `default`; the unparseable case is logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!("document '{}' is unreadable, using default: {}", key, err);
                default
            }
        }
    }

    /// The tagged inner read: `Ok(None)` for a missing document, `Err` for
    /// an unreadable or unparseable one.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Persist the document under `key`. Write failures are logged and
    /// swallowed; callers never observe them.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            warn!("failed to persist document '{}': {}", key, err);
        }
    }

    pub fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), contents)?;
        Ok(())
    }
}
