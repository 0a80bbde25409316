//! # Symbol Table
//!
//! The fixed bidirectional mapping between characters and Morse patterns.
//!
//! The forward table covers the letters A-Z, the digits 0-9, common
//! punctuation, and the literal space (which maps to itself and is handled
//! as a word boundary by the codec). The reverse mapping is derived from the
//! forward table at construction; the table is injective, so the reverse
//! lookup is well-defined.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Forward character-to-pattern entries.
///
/// Every pattern is a string over `{.,-}` except the space entry, which maps
/// to itself.
const ENTRIES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('@', ".--.-."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    ('$', "...-..-"),
    (' ', " "),
];

/// Immutable bidirectional character/pattern mapping.
///
/// Built once and read-only thereafter. Hosts normally use the shared
/// instance from [`standard_table()`]; the codec functions take a reference
/// so an alternative table can be injected.
#[derive(Debug)]
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// Build the standard table from the fixed entry list.
    pub fn standard() -> Self {
        let mut forward = HashMap::with_capacity(ENTRIES.len());
        let mut reverse = HashMap::with_capacity(ENTRIES.len());
        for &(ch, pattern) in ENTRIES {
            forward.insert(ch, pattern);
            reverse.insert(pattern, ch);
        }
        SymbolTable { forward, reverse }
    }

    /// Look up the Morse pattern for a character (uppercase expected).
    pub fn pattern(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Look up the character for a Morse pattern.
    pub fn character(&self, pattern: &str) -> Option<char> {
        self.reverse.get(pattern).copied()
    }

    /// All mapped characters, in table order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        ENTRIES.iter().map(|&(ch, _)| ch)
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Shared process-wide table, built on first use.
pub fn standard_table() -> &'static SymbolTable {
    static TABLE: OnceLock<SymbolTable> = OnceLock::new();
    TABLE.get_or_init(SymbolTable::standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_injective() {
        let table = SymbolTable::standard();
        // Reverse map loses nothing, so no two characters share a pattern.
        assert_eq!(table.len(), ENTRIES.len());
        assert_eq!(table.forward.len(), table.reverse.len());
    }

    #[test]
    fn test_patterns_use_morse_alphabet() {
        let table = SymbolTable::standard();
        for ch in table.characters() {
            let pattern = table.pattern(ch).unwrap();
            if ch == ' ' {
                assert_eq!(pattern, " ");
            } else {
                assert!(!pattern.is_empty());
                assert!(pattern.chars().all(|c| c == '.' || c == '-'));
            }
        }
    }

    #[test]
    fn test_round_trip_lookup() {
        let table = SymbolTable::standard();
        assert_eq!(table.pattern('S'), Some("..."));
        assert_eq!(table.character("..."), Some('S'));
        assert_eq!(table.pattern('#'), None);
        assert_eq!(table.character("........"), None);
    }
}
