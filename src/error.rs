//! # Error Types
//!
//! This module defines all error types for the Morse crate.
//!
//! ## Error Types
//! - `EmptyInput` - the codec was handed a blank (or whitespace-only) buffer
//! - `UnplayableSymbol` - the playback compiler met a character outside the
//!   Morse stream alphabet; the host must only compile fully recognized output
//! - `AudioUnavailable` - no audio device could be opened at startup
//! - `SettingsError` - the settings file exists but could not be parsed
//! - `HistoryError` - the history log could not be read or written
//!
//! ## Usage
//! ```rust
//! use morse::{encode_text, MorseError};
//!
//! match encode_text("   ") {
//!     Err(MorseError::EmptyInput) => eprintln!("nothing to convert"),
//!     other => panic!("expected EmptyInput, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    /// The input was empty after trimming.
    ///
    /// Both codec directions require a non-empty buffer; the host is expected
    /// to reject blank input before calling in, and the codec enforces the
    /// same contract.
    #[error("Input is empty")]
    EmptyInput,

    /// A character outside `.`, `-`, space, and `/` reached the playback
    /// compiler.
    ///
    /// This is a precondition violation: the host must only schedule Morse
    /// strings whose conversion was fully recognized (no `?` sentinels).
    ///
    /// # Example
    /// ```
    /// # use morse::MorseError;
    /// let err = MorseError::UnplayableSymbol { symbol: '?', position: 4 };
    /// assert_eq!(err.to_string(), "Unplayable symbol '?' at position 4");
    /// ```
    #[error("Unplayable symbol '{symbol}' at position {position}")]
    UnplayableSymbol { symbol: char, position: usize },

    /// No audio output device could be opened.
    ///
    /// Detected once at startup; the host disables the play affordance and
    /// the codec keeps working.
    #[error("Audio output unavailable: {0}")]
    AudioUnavailable(String),

    /// The settings file could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use morse::MorseError;
    /// let err = MorseError::SettingsError("tone-frequency must be a number".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: tone-frequency must be a number");
    /// ```
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    /// The history log could not be read from or written to disk.
    #[error("History storage error: {0}")]
    HistoryError(String),
}
