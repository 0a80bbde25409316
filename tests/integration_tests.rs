//! Integration tests for the Morse crate
//!
//! Tests the full pipeline from raw text through encoding, event
//! compilation, and history logging, via the public API only.

use morse::history::{ConversionKind, HistoryEntry, HistoryLog};
use morse::{compile_events, decode_morse, encode_text, MorseError, Settings};

#[test]
fn test_encode_then_compile_pipeline() {
    let result = encode_text("hi there").unwrap();
    assert!(result.all_symbols_recognized);
    assert_eq!(result.output, ".... .. / - .... . .-. .");

    let sequence = compile_events(&result.output).unwrap();
    // 16 sounding symbols: HI = 6 dots, THERE = 2 dashes + 8 dots.
    assert_eq!(sequence.tones.len(), 16);
    assert!(sequence.total_duration > 0.0);
}

#[test]
fn test_round_trip_through_public_api() {
    let encoded = encode_text("The quick brown fox 123").unwrap();
    assert!(encoded.all_symbols_recognized);

    let decoded = decode_morse(&encoded.output).unwrap();
    assert_eq!(decoded.output, "THE QUICK BROWN FOX 123");
}

#[test]
fn test_unrecognized_input_blocks_playback() {
    let encoded = encode_text("A#B").unwrap();
    assert!(!encoded.all_symbols_recognized);

    // The host gates on the flag; compiling the degraded output fails loudly.
    assert!(matches!(
        compile_events(&encoded.output),
        Err(MorseError::UnplayableSymbol { symbol: '?', .. })
    ));
}

#[test]
fn test_decode_tolerance_matches_canonical() {
    let canonical = decode_morse(".... .. / - .... . .-. .").unwrap();
    let irregular = decode_morse(" ....  ..   /  - ....   . .-. .  ").unwrap();
    assert_eq!(canonical.output, irregular.output);
}

#[test]
fn test_conversions_flow_into_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = HistoryLog::open(dir.path()).unwrap();

    let encoded = encode_text("SOS").unwrap();
    log.record(HistoryEntry::new(
        ConversionKind::TextToMorse,
        "SOS",
        &encoded.output,
    ))
    .unwrap();

    let decoded = decode_morse(&encoded.output).unwrap();
    log.record(HistoryEntry::new(
        ConversionKind::MorseToText,
        &encoded.output,
        &decoded.output,
    ))
    .unwrap();

    let entries = log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, ConversionKind::MorseToText);
    assert_eq!(entries[0].output, "SOS");
    assert_eq!(entries[1].kind, ConversionKind::TextToMorse);
    assert_eq!(entries[1].input, "SOS");
}

#[test]
fn test_settings_drive_history_location() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::parse(&format!("history-dir: {}\n", dir.path().display())).unwrap();

    let mut log = HistoryLog::open(&settings.history_dir()).unwrap();
    log.record(HistoryEntry::new(ConversionKind::TextToMorse, "E", "."))
        .unwrap();

    assert!(dir.path().join("morse_history.json").exists());
}
