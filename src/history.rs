//! # Conversion History
//!
//! Rolling log of the most recent conversions, newest first, capped at 50
//! entries and persisted as JSON under a fixed storage key. A missing or
//! corrupt file starts the log empty rather than failing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MorseError;

/// Fixed storage key; the log lives in `<dir>/morse_history.json`.
pub const HISTORY_KEY: &str = "morse_history";

/// Maximum retained entries; older ones are silently dropped.
pub const HISTORY_CAP: usize = 50;

/// Which direction a logged conversion ran.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConversionKind {
    TextToMorse,
    MorseToText,
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionKind::TextToMorse => write!(f, "Text to Morse"),
            ConversionKind::MorseToText => write!(f, "Morse to Text"),
        }
    }
}

/// One logged conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub kind: ConversionKind,
    pub input: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(kind: ConversionKind, input: &str, output: &str) -> Self {
        HistoryEntry {
            kind,
            input: input.to_string(),
            output: output.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Durable most-recent-first conversion log.
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    path: PathBuf,
}

impl HistoryLog {
    /// Open (or create) the log stored under `dir`.
    ///
    /// # Errors
    /// Returns [`MorseError::HistoryError`] when the directory cannot be
    /// created. An unreadable or corrupt log file is not an error; the log
    /// starts empty.
    pub fn open(dir: &Path) -> Result<Self, MorseError> {
        fs::create_dir_all(dir).map_err(|e| MorseError::HistoryError(e.to_string()))?;
        let path = dir.join(format!("{HISTORY_KEY}.json"));
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        Ok(HistoryLog { entries, path })
    }

    /// Prepend an entry, drop anything past the cap, and save.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), MorseError> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        self.save()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drop all entries and remove the stored file.
    pub fn clear(&mut self) -> Result<(), MorseError> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| MorseError::HistoryError(e.to_string()))?;
        }
        Ok(())
    }

    fn save(&self) -> Result<(), MorseError> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| MorseError::HistoryError(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| MorseError::HistoryError(e.to_string()))
    }
}
