use std::env;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use morse::history::{ConversionKind, HistoryEntry, HistoryLog};
use morse::playback::{compile_events, Player, RodioTone};
use morse::settings::Settings;

fn usage() -> ! {
    eprintln!("Usage: morse [--settings <file>] encode <text>");
    eprintln!("       morse [--settings <file>] decode <morse>");
    eprintln!("       morse [--settings <file>] play <text>");
    eprintln!("       morse [--settings <file>] history [clear]");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    let mut index = 1;
    let mut settings_path = PathBuf::from("morse.yaml");

    // Parse flags
    if args[1] == "--settings" {
        if args.len() < 4 {
            usage();
        }
        settings_path = PathBuf::from(&args[2]);
        index = 3;
    }

    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    let rest = args[index + 1..].join(" ");
    match args[index].as_str() {
        "encode" => cmd_encode(&settings, &rest),
        "decode" => cmd_decode(&settings, &rest),
        "play" => cmd_play(&settings, &rest),
        "history" => cmd_history(&settings, rest.trim()),
        _ => usage(),
    }
}

fn cmd_encode(settings: &Settings, input: &str) {
    if input.trim().is_empty() {
        eprintln!("Please enter some text to convert");
        process::exit(1);
    }

    let result = match morse::encode_text(input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", result.output);
    if !result.all_symbols_recognized {
        eprintln!("Some characters could not be encoded and became '?'");
    }

    record(settings, ConversionKind::TextToMorse, input.trim(), &result.output);
}

fn cmd_decode(settings: &Settings, input: &str) {
    if input.trim().is_empty() {
        eprintln!("Please enter Morse code to convert");
        process::exit(1);
    }

    let result = match morse::decode_morse(input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", result.output);
    if !result.all_symbols_recognized {
        eprintln!("Some tokens could not be decoded and became '?'");
    }

    record(settings, ConversionKind::MorseToText, input.trim(), &result.output);
}

fn cmd_play(settings: &Settings, input: &str) {
    if input.trim().is_empty() {
        eprintln!("Please enter some text to play");
        process::exit(1);
    }

    let result = match morse::encode_text(input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Conversion error: {}", e);
            process::exit(1);
        }
    };

    // Playback is only offered for fully recognized encodings.
    if !result.all_symbols_recognized {
        eprintln!("Cannot play: input contains characters outside the symbol table");
        process::exit(1);
    }

    let sequence = match compile_events(&result.output) {
        Ok(sequence) => sequence,
        Err(e) => {
            eprintln!("Playback error: {}", e);
            process::exit(1);
        }
    };

    let generator = match RodioTone::new(settings.tone_frequency, settings.tone_volume) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!(
        "Playing {} ({} tones, {:.1}s)",
        result.output,
        sequence.tones.len(),
        sequence.total_duration
    );

    let mut player = Player::new(generator);
    player.load(sequence);
    player.start();
    while player.is_playing() {
        player.tick();
        thread::sleep(Duration::from_millis(25));
    }
}

fn cmd_history(settings: &Settings, arg: &str) {
    let mut log = match HistoryLog::open(&settings.history_dir()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match arg {
        "clear" => {
            if let Err(e) = log.clear() {
                eprintln!("{}", e);
                process::exit(1);
            }
            println!("History cleared");
        }
        "" => {
            if log.entries().is_empty() {
                println!("No conversion history yet");
                return;
            }
            for entry in log.entries() {
                println!(
                    "{} - {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.kind
                );
                println!("  Input:  {}", entry.input);
                println!("  Output: {}", entry.output);
            }
        }
        _ => usage(),
    }
}

fn record(settings: &Settings, kind: ConversionKind, input: &str, output: &str) {
    // A history failure never takes down the conversion itself.
    let saved = HistoryLog::open(&settings.history_dir())
        .and_then(|mut log| log.record(HistoryEntry::new(kind, input, output)));
    if let Err(e) = saved {
        eprintln!("Warning: {}", e);
    }
}
