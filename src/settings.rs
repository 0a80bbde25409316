//! # Host Settings
//!
//! Optional YAML settings for the host: tone frequency and volume for the
//! audio backend and the directory holding the history log. Every field has
//! a default, so a partial file or no file at all is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MorseError;

/// Default oscillator frequency, Hz.
pub const DEFAULT_TONE_FREQUENCY: f32 = 800.0;

/// Default playback gain.
pub const DEFAULT_TONE_VOLUME: f32 = 0.3;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub tone_frequency: f32,
    pub tone_volume: f32,
    /// Directory for the history log; `None` means the current directory.
    pub history_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tone_frequency: DEFAULT_TONE_FREQUENCY,
            tone_volume: DEFAULT_TONE_VOLUME,
            history_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// a [`MorseError::SettingsError`].
    pub fn load(path: &Path) -> Result<Self, MorseError> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| MorseError::SettingsError(e.to_string()))?;
        Self::parse(&raw)
    }

    /// Parse settings from a YAML string.
    pub fn parse(raw: &str) -> Result<Self, MorseError> {
        serde_yaml::from_str(raw).map_err(|e| MorseError::SettingsError(e.to_string()))
    }

    /// The directory the history log lives in.
    pub fn history_dir(&self) -> PathBuf {
        self.history_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tone_frequency, 800.0);
        assert_eq!(settings.tone_volume, 0.3);
        assert!(settings.history_dir.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::parse(
            "tone-frequency: 600\ntone-volume: 0.5\nhistory-dir: /tmp/morse\n",
        )
        .unwrap();
        assert_eq!(settings.tone_frequency, 600.0);
        assert_eq!(settings.tone_volume, 0.5);
        assert_eq!(settings.history_dir, Some(PathBuf::from("/tmp/morse")));
    }

    #[test]
    fn test_parse_applies_field_defaults() {
        let settings = Settings::parse("tone-frequency: 440\n").unwrap();
        assert_eq!(settings.tone_frequency, 440.0);
        assert_eq!(settings.tone_volume, DEFAULT_TONE_VOLUME);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            Settings::parse("tone-frequency: [not a number"),
            Err(MorseError::SettingsError(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("does-not-exist.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
