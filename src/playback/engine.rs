//! Event compilation engine
//!
//! Converts a validated Morse string into an ordered tone-event sequence
//! with precise relative timing.

use crate::error::MorseError;
use super::types::{EventSequence, MorseSymbol, ToneEvent};

/// Compile a Morse string into timed tone events.
///
/// Walks the string left to right with a running cursor starting at zero:
/// dots and dashes emit a tone at the cursor and advance it by the tone
/// length plus the intra-character gap; spaces and `/` advance it by the
/// letter and word gaps without emitting anything. The final cursor value
/// becomes the sequence's total duration.
///
/// The input must be a fully recognized encoding — only `.`, `-`, space,
/// and `/` are legal here. Anything else (including the `?` sentinel) is a
/// precondition violation the host should have filtered on the
/// `all_symbols_recognized` flag.
///
/// # Example
/// ```rust
/// use morse::playback::compile_events;
///
/// let sequence = compile_events("...")?;
/// assert_eq!(sequence.tones.len(), 3);
/// assert!((sequence.total_duration - 0.6).abs() < 1e-9);
/// # Ok::<(), morse::MorseError>(())
/// ```
///
/// # Errors
/// Returns [`MorseError::UnplayableSymbol`] for any character outside the
/// Morse stream alphabet.
pub fn compile_events(morse: &str) -> Result<EventSequence, MorseError> {
    let mut cursor = 0.0;
    let mut tones = Vec::new();

    for (position, ch) in morse.chars().enumerate() {
        let symbol = MorseSymbol::from_char(ch)
            .ok_or(MorseError::UnplayableSymbol { symbol: ch, position })?;

        if let Some(duration) = symbol.tone_duration() {
            tones.push(ToneEvent {
                start_offset: cursor,
                duration,
            });
        }
        cursor += symbol.cursor_advance();
    }

    Ok(EventSequence {
        tones,
        total_duration: cursor,
    })
}
