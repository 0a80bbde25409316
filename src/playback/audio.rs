//! Rodio-backed tone generator
//!
//! Plays tone events as sine bursts on the default output device. The sink
//! is the single-shot oscillator analog: scheduling appends padding silence
//! and tones back to back, and rearming stops the sink and opens a fresh one
//! while the output stream (the audio context) stays alive.

use std::time::{Duration, Instant};

use rodio::source::{SineWave, Source, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::MorseError;
use super::player::ToneGenerator;

pub struct RodioTone {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    epoch: Instant,
    // End time of the last appended source, on this generator's clock.
    cursor: Option<f64>,
    frequency: f32,
    volume: f32,
}

impl RodioTone {
    /// Open the default output device.
    ///
    /// # Errors
    /// Returns [`MorseError::AudioUnavailable`] when no device or sink can
    /// be opened; the host should disable the play affordance and carry on.
    pub fn new(frequency: f32, volume: f32) -> Result<Self, MorseError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| MorseError::AudioUnavailable(e.to_string()))?;
        let sink = Sink::try_new(&handle)
            .map_err(|e| MorseError::AudioUnavailable(e.to_string()))?;

        Ok(RodioTone {
            _stream: stream,
            handle,
            sink: Some(sink),
            epoch: Instant::now(),
            cursor: None,
            frequency,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

impl ToneGenerator for RodioTone {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn schedule_tone(&mut self, start: f64, duration: f64) {
        let now = self.now();
        let Some(sink) = &self.sink else {
            // Rearming failed earlier; the generator stays silent.
            return;
        };

        let cursor = self.cursor.unwrap_or(now);
        let lead = start - cursor;
        if lead > 0.0 {
            sink.append(
                Zero::<f32>::new(1, 44_100).take_duration(Duration::from_secs_f64(lead)),
            );
        }
        sink.append(
            SineWave::new(self.frequency)
                .take_duration(Duration::from_secs_f64(duration))
                .amplify(self.volume),
        );
        self.cursor = Some(start.max(cursor) + duration);
    }

    fn rearm(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.sink = Sink::try_new(&self.handle).ok();
        self.cursor = None;
    }
}
