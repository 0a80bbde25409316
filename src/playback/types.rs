//! Playback data type definitions
//!
//! This module defines the timing unit system and the types produced by the
//! event compiler and consumed by the player.

use serde::Serialize;

/// Duration of a dot tone, in seconds. The base unit of the timing system.
pub const DOT_SECS: f64 = 0.1;

/// Duration of a dash tone, in seconds (three units).
pub const DASH_SECS: f64 = 0.3;

/// Silence after every tone within a character (one unit).
pub const ELEMENT_GAP_SECS: f64 = 0.1;

/// Silence for a letter boundary (space in the Morse stream).
pub const LETTER_GAP_SECS: f64 = 0.3;

/// Silence for a word boundary (`/` in the Morse stream).
pub const WORD_GAP_SECS: f64 = 0.7;

/// One symbol of the Morse stream alphabet.
///
/// Dots and dashes produce tones; letter and word gaps are pure silence and
/// only advance the playback cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseSymbol {
    Dot,
    Dash,
    LetterGap,
    WordGap,
}

impl MorseSymbol {
    /// Classify one character of a Morse stream.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(MorseSymbol::Dot),
            '-' => Some(MorseSymbol::Dash),
            ' ' => Some(MorseSymbol::LetterGap),
            '/' => Some(MorseSymbol::WordGap),
            _ => None,
        }
    }

    /// Tone duration for sounding symbols, `None` for silence.
    pub fn tone_duration(&self) -> Option<f64> {
        match self {
            MorseSymbol::Dot => Some(DOT_SECS),
            MorseSymbol::Dash => Some(DASH_SECS),
            MorseSymbol::LetterGap | MorseSymbol::WordGap => None,
        }
    }

    /// How far the cursor advances past this symbol.
    ///
    /// Tones carry their trailing intra-character gap; gaps are their own
    /// advance.
    pub fn cursor_advance(&self) -> f64 {
        match self {
            MorseSymbol::Dot => DOT_SECS + ELEMENT_GAP_SECS,
            MorseSymbol::Dash => DASH_SECS + ELEMENT_GAP_SECS,
            MorseSymbol::LetterGap => LETTER_GAP_SECS,
            MorseSymbol::WordGap => WORD_GAP_SECS,
        }
    }
}

/// A single scheduled tone.
///
/// `start_offset` is relative to the start of the session; the player adds
/// the generator's current clock reading when scheduling, which keeps the
/// timing robust to call latency.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToneEvent {
    pub start_offset: f64,
    pub duration: f64,
}

/// The compiled form of a Morse string.
///
/// Immutable once computed. `total_duration` is the final cursor value of
/// the compilation walk and is the authoritative session length, including
/// the trailing intra-character gap after the last tone.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSequence {
    pub tones: Vec<ToneEvent>,
    pub total_duration: f64,
}

/// Player state. Exactly one live value per playback session.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Idle,
    Playing,
}
