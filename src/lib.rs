pub mod codec;
pub mod error;
pub mod history;
pub mod playback;
pub mod settings;
pub mod table;

pub use codec::ConversionResult;
pub use error::MorseError;
pub use history::{ConversionKind, HistoryEntry, HistoryLog};
pub use playback::{compile_events, EventSequence, PlaybackState, Player, RodioTone, ToneGenerator};
pub use settings::Settings;
pub use table::{standard_table, SymbolTable};

/// Encode text into Morse using the standard symbol table.
/// This is the main entry point for the library.
pub fn encode_text(text: &str) -> Result<ConversionResult, MorseError> {
    codec::encode_text(standard_table(), text)
}

/// Decode a Morse string into text using the standard symbol table.
pub fn decode_morse(morse: &str) -> Result<ConversionResult, MorseError> {
    codec::decode_morse(standard_table(), morse)
}
