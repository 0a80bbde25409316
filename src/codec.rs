//! # Codec
//!
//! Bidirectional text/Morse conversion with per-symbol validity tracking.
//!
//! Both directions degrade per symbol rather than failing: characters or
//! letter-tokens missing from the table become the `?` sentinel and clear the
//! `all_symbols_recognized` flag on the result, letting the host decide
//! whether the output is playable.

use serde::Serialize;

use crate::error::MorseError;
use crate::table::SymbolTable;

/// Sentinel emitted for characters or tokens outside the symbol table.
pub const UNKNOWN_SENTINEL: &str = "?";

/// Token separating words in an encoded Morse string.
pub const WORD_SEPARATOR: &str = "/";

/// The outcome of a single conversion call.
///
/// Produced fresh per call and handed to the caller; `all_symbols_recognized`
/// is false when any `?` sentinel was emitted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub output: String,
    pub all_symbols_recognized: bool,
}

/// Encode plain text into a Morse string.
///
/// Case-insensitive: input is uppercased before lookup. Each character
/// becomes one token — its pattern, the word separator `/` for a space, or
/// `?` for anything unmapped — and tokens are joined by single spaces with
/// no trailing separator. Consecutive spaces collapse into a single word
/// boundary.
///
/// # Example
/// ```rust
/// use morse::standard_table;
///
/// let result = morse::codec::encode_text(standard_table(), "sos")?;
/// assert_eq!(result.output, "... --- ...");
/// assert!(result.all_symbols_recognized);
/// # Ok::<(), morse::MorseError>(())
/// ```
///
/// # Errors
/// Returns [`MorseError::EmptyInput`] when the trimmed input is empty.
pub fn encode_text(table: &SymbolTable, text: &str) -> Result<ConversionResult, MorseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MorseError::EmptyInput);
    }

    let normalized = text.to_uppercase();
    let mut tokens: Vec<&str> = Vec::new();
    let mut all_recognized = true;
    let mut at_word_boundary = false;

    for ch in normalized.chars() {
        if ch == ' ' {
            // A run of spaces is one word boundary.
            if !at_word_boundary {
                tokens.push(WORD_SEPARATOR);
                at_word_boundary = true;
            }
            continue;
        }
        at_word_boundary = false;
        match table.pattern(ch) {
            Some(pattern) => tokens.push(pattern),
            None => {
                all_recognized = false;
                tokens.push(UNKNOWN_SENTINEL);
            }
        }
    }

    Ok(ConversionResult {
        output: tokens.join(" "),
        all_symbols_recognized: all_recognized,
    })
}

/// Decode a Morse string back into text.
///
/// Words are separated by `/`, letters within a word by whitespace.
/// Irregular spacing around separators is tolerated; empty letter-tokens are
/// skipped. Unknown tokens decode to `?` and clear the recognized flag.
///
/// Empty word segments are preserved: every `/` contributes exactly one
/// separating space even with no adjacent letters, so word positions stay
/// stable (`"/"` alone decodes to a single space).
///
/// # Errors
/// Returns [`MorseError::EmptyInput`] when the trimmed input is empty.
pub fn decode_morse(table: &SymbolTable, morse: &str) -> Result<ConversionResult, MorseError> {
    let morse = morse.trim();
    if morse.is_empty() {
        return Err(MorseError::EmptyInput);
    }

    let mut all_recognized = true;
    let mut words: Vec<String> = Vec::new();

    for segment in morse.split('/') {
        let mut word = String::new();
        for token in segment.split_whitespace() {
            match table.character(token) {
                Some(ch) => word.push(ch),
                None => {
                    all_recognized = false;
                    word.push('?');
                }
            }
        }
        words.push(word);
    }

    Ok(ConversionResult {
        output: words.join(" "),
        all_symbols_recognized: all_recognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::standard_table;

    #[test]
    fn test_encode_basic() {
        let result = encode_text(standard_table(), "SOS").unwrap();
        assert_eq!(result.output, "... --- ...");
        assert!(result.all_symbols_recognized);
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        let upper = encode_text(standard_table(), "HELLO").unwrap();
        let lower = encode_text(standard_table(), "hello").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_encode_word_separation() {
        let result = encode_text(standard_table(), "HI THERE").unwrap();
        assert_eq!(result.output, ".... .. / - .... . .-. .");
        assert_eq!(result.output.matches('/').count(), 1);
    }

    #[test]
    fn test_encode_collapses_consecutive_spaces() {
        let single = encode_text(standard_table(), "HI THERE").unwrap();
        let multiple = encode_text(standard_table(), "HI    THERE").unwrap();
        assert_eq!(single, multiple);
    }

    #[test]
    fn test_encode_unknown_character_degrades() {
        let result = encode_text(standard_table(), "A#B").unwrap();
        assert_eq!(result.output, ".- ? -...");
        assert!(!result.all_symbols_recognized);
    }

    #[test]
    fn test_encode_no_trailing_separator() {
        let result = encode_text(standard_table(), "E").unwrap();
        assert_eq!(result.output, ".");
    }

    #[test]
    fn test_encode_empty_input_is_rejected() {
        assert!(matches!(
            encode_text(standard_table(), "   "),
            Err(MorseError::EmptyInput)
        ));
    }

    #[test]
    fn test_decode_basic() {
        let result = decode_morse(standard_table(), ".... .. / - .... . .-. .").unwrap();
        assert_eq!(result.output, "HI THERE");
        assert!(result.all_symbols_recognized);
    }

    #[test]
    fn test_decode_tolerates_irregular_spacing() {
        let canonical = decode_morse(standard_table(), ".... .. / - ....").unwrap();
        let irregular = decode_morse(standard_table(), ".... ..   / - ....").unwrap();
        assert_eq!(canonical, irregular);
        assert_eq!(canonical.output, "HI TH");
    }

    #[test]
    fn test_decode_unknown_token_degrades() {
        let result = decode_morse(standard_table(), ".- ........ -...").unwrap();
        assert_eq!(result.output, "A?B");
        assert!(!result.all_symbols_recognized);
    }

    #[test]
    fn test_decode_preserves_empty_word_segments() {
        // A separator with no adjacent letters still contributes its space.
        let result = decode_morse(standard_table(), ".... / / -").unwrap();
        assert_eq!(result.output, "H  T");
    }

    #[test]
    fn test_decode_separator_only_input() {
        let result = decode_morse(standard_table(), "/").unwrap();
        assert_eq!(result.output, " ");
        assert!(result.all_symbols_recognized);
    }

    #[test]
    fn test_decode_empty_input_is_rejected() {
        assert!(matches!(
            decode_morse(standard_table(), ""),
            Err(MorseError::EmptyInput)
        ));
    }

    #[test]
    fn test_round_trip_over_table_characters() {
        let table = standard_table();
        let text: String = table.characters().filter(|&ch| ch != ' ').collect();
        let encoded = encode_text(table, &text).unwrap();
        assert!(encoded.all_symbols_recognized);
        let decoded = decode_morse(table, &encoded.output).unwrap();
        assert!(decoded.all_symbols_recognized);
        assert_eq!(decoded.output, text.to_uppercase());
    }

    #[test]
    fn test_round_trip_with_words() {
        let encoded = encode_text(standard_table(), "practice makes perfect").unwrap();
        let decoded = decode_morse(standard_table(), &encoded.output).unwrap();
        assert_eq!(decoded.output, "PRACTICE MAKES PERFECT");
    }
}
