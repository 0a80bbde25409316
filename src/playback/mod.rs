//! # Playback Module
//!
//! Compile a Morse string into timed tone events and play them.
//!
//! ## Purpose
//! This module turns a fully recognized Morse string into an ordered
//! sequence of (start-offset, duration) tone events and drives a toggleable
//! play/stop state machine against an audio clock.
//!
//! ## Sub-modules
//! - `types` - timing constants, MorseSymbol, ToneEvent, EventSequence
//! - `engine` - event compilation (the cursor walk)
//! - `player` - the play/stop state machine and the ToneGenerator seam
//! - `audio` - the rodio-backed tone generator
//!
//! ## Timing System
//! The dot is the base unit (0.1 s). A dash is three units; every tone is
//! followed by a one-unit intra-character gap; letter and word boundaries
//! are three and seven units of pure silence. Gaps never become events —
//! they only advance the cursor, and the final cursor value is the session
//! length.
//!
//! ## Entry Points
//! - [`compile_events()`] - Morse string to [`EventSequence`]
//! - [`Player`] - load/start/stop/toggle over a [`ToneGenerator`]
//!
//! ## Example
//! ```rust
//! use morse::playback::compile_events;
//!
//! let sequence = compile_events(".- / -")?;
//! assert_eq!(sequence.tones.len(), 3);
//! # Ok::<(), morse::MorseError>(())
//! ```

mod types;
mod engine;
mod player;
mod audio;


pub use types::{
    EventSequence, MorseSymbol, PlaybackState, ToneEvent, DASH_SECS, DOT_SECS,
    ELEMENT_GAP_SECS, LETTER_GAP_SECS, WORD_GAP_SECS,
};
pub use engine::compile_events;
pub use player::{Player, ToneGenerator};
pub use audio::RodioTone;
