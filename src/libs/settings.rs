//! Persistent update preferences for the launcher.
//!
//! Stores the user's update-related choices (automatic checks, check
//! interval, beta channel opt-in), the timestamp of the last completed
//! check, and the per-version skip registry in a single JSON file in the
//! application data directory.
//!
//! ## Durability model
//!
//! Every setter performs a synchronous whole-file write before
//! returning, so any other view of the configuration is never stale
//! relative to the last setter call. A failed write is logged and
//! otherwise ignored: the in-memory state stays authoritative and the
//! next setter retries the flush. Loading is equally forgiving - a
//! missing file produces defaults, a corrupt file produces defaults with
//! a warning, and an absent or unparsable interval falls back to one day
//! without failing the rest of the load.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::PathBuf;

/// Settings file name inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "update.json";

/// Default interval between automatic checks: one day, in seconds.
pub const DEFAULT_CHECK_INTERVAL: f64 = 86400.0;

/// On-disk representation of the update preferences.
#[derive(Serialize, Deserialize, Clone, Debug)]
struct StoredPreferences {
    #[serde(default)]
    allow_beta: bool,

    #[serde(default)]
    auto_check: bool,

    /// Seconds between automatic checks. Deserialized leniently: any
    /// value that is not a number (or a numeric string) becomes the
    /// default instead of failing the load.
    #[serde(default = "default_interval", deserialize_with = "lenient_interval")]
    update_interval: f64,

    /// ISO-8601 timestamp of the last completed check attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_check: Option<String>,

    /// Version tags the user chose to skip. Entries are never pruned.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    skip: HashMap<String, bool>,
}

impl Default for StoredPreferences {
    fn default() -> Self {
        StoredPreferences {
            allow_beta: false,
            auto_check: false,
            update_interval: DEFAULT_CHECK_INTERVAL,
            last_check: None,
            skip: HashMap::new(),
        }
    }
}

fn default_interval() -> f64 {
    DEFAULT_CHECK_INTERVAL
}

fn lenient_interval<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_CHECK_INTERVAL))
}

/// Durable store for update preferences and the skip registry.
///
/// The interior mutex serializes read-modify-write sequences so that a
/// concurrently running scheduler recompute never observes a half-applied
/// settings change.
pub struct UpdateSettings {
    path: PathBuf,
    prefs: Mutex<StoredPreferences>,
}

impl UpdateSettings {
    /// Loads the settings from the default application data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        Ok(Self::with_file(path))
    }

    /// Loads the settings from an explicit file path.
    ///
    /// Used by the default constructor and directly by tests.
    pub fn with_file(path: PathBuf) -> Self {
        let prefs = Self::load(&path);
        UpdateSettings {
            path,
            prefs: Mutex::new(prefs),
        }
    }

    fn load(path: &PathBuf) -> StoredPreferences {
        if !path.exists() {
            return StoredPreferences::default();
        }
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                msg_warning!(Message::SettingsFileCorrupt(e.to_string()));
                return StoredPreferences::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                msg_warning!(Message::SettingsFileCorrupt(e.to_string()));
                StoredPreferences::default()
            }
        }
    }

    // Whole-file replacement write. Failures are logged, never surfaced:
    // durability here is advisory, the in-memory state stays correct and
    // the next setter retries.
    fn flush(&self, prefs: &StoredPreferences) {
        let result = File::create(&self.path).map_err(anyhow::Error::from).and_then(|file| {
            serde_json::to_writer_pretty(&file, prefs)?;
            Ok(())
        });
        if let Err(e) = result {
            msg_warning!(Message::SettingsFlushFailed(e.to_string()));
        }
    }

    pub fn auto_check(&self) -> bool {
        self.prefs.lock().auto_check
    }

    pub fn set_auto_check(&self, enabled: bool) {
        let mut prefs = self.prefs.lock();
        prefs.auto_check = enabled;
        self.flush(&prefs);
    }

    pub fn check_interval(&self) -> f64 {
        self.prefs.lock().update_interval
    }

    pub fn set_check_interval(&self, seconds: f64) {
        let mut prefs = self.prefs.lock();
        prefs.update_interval = seconds;
        self.flush(&prefs);
    }

    pub fn beta_allowed(&self) -> bool {
        self.prefs.lock().allow_beta
    }

    pub fn set_beta_allowed(&self, allowed: bool) {
        let mut prefs = self.prefs.lock();
        prefs.allow_beta = allowed;
        self.flush(&prefs);
    }

    /// Timestamp of the last completed check attempt, if any.
    ///
    /// An unparsable stored value is treated as "never checked".
    pub fn last_check(&self) -> Option<DateTime<Utc>> {
        let prefs = self.prefs.lock();
        prefs
            .last_check
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Records the time of a completed check attempt and flushes.
    pub fn record_check_time(&self, timestamp: DateTime<Utc>) {
        let mut prefs = self.prefs.lock();
        prefs.last_check = Some(timestamp.to_rfc3339());
        self.flush(&prefs);
    }

    pub fn is_version_skipped(&self, tag: &str) -> bool {
        self.prefs.lock().skip.get(tag).copied().unwrap_or(false)
    }

    pub fn mark_version_skipped(&self, tag: &str) {
        let mut prefs = self.prefs.lock();
        prefs.skip.insert(tag.to_string(), true);
        self.flush(&prefs);
    }

    /// All version tags currently marked as skipped, sorted for display.
    pub fn skipped_versions(&self) -> Vec<String> {
        let prefs = self.prefs.lock();
        let mut tags: Vec<String> = prefs.skip.iter().filter(|(_, &skipped)| skipped).map(|(tag, _)| tag.clone()).collect();
        tags.sort();
        tags
    }
}
