//! Playback state machine
//!
//! Owns the current Morse material and drives a toggleable play/stop session
//! against an injected tone generator. Single logical thread of control: the
//! host calls in, nothing here spawns workers or takes locks.

use super::types::{EventSequence, PlaybackState};

/// The seam between the player and the audio backend.
///
/// A generator wraps a single-shot oscillator: once silenced it cannot be
/// restarted, so [`rearm`](ToneGenerator::rearm) replaces it with a fresh one
/// ready for the next session. All times are seconds on the generator's own
/// clock, not wall-clock epoch.
pub trait ToneGenerator {
    /// Current reading of the generator clock.
    fn now(&self) -> f64;

    /// Schedule a tone starting at an absolute clock time.
    fn schedule_tone(&mut self, start: f64, duration: f64);

    /// Cut any in-flight or pending sound immediately and replace the
    /// underlying oscillator with a fresh one.
    fn rearm(&mut self);
}

/// Play/stop state machine over a compiled event sequence.
///
/// At most one session is active at a time. `start()` while playing is
/// ignored rather than queued; `stop()` is idempotent. The deferred
/// transition back to idle is cooperative: the host pumps [`tick`](Player::tick)
/// while a session runs.
#[derive(Debug)]
pub struct Player<G: ToneGenerator> {
    generator: G,
    state: PlaybackState,
    current: Option<EventSequence>,
    ends_at: Option<f64>,
}

impl<G: ToneGenerator> Player<G> {
    pub fn new(generator: G) -> Self {
        Player {
            generator,
            state: PlaybackState::Idle,
            current: None,
            ends_at: None,
        }
    }

    /// Replace the current Morse material. Stops any running session first.
    pub fn load(&mut self, sequence: EventSequence) {
        self.stop();
        self.current = Some(sequence);
    }

    /// Begin a session from idle.
    ///
    /// Schedules every tone at `generator.now() + start_offset` and arms the
    /// auto-stop deadline at `now + total_duration`. Ignored while already
    /// playing or with nothing loaded.
    pub fn start(&mut self) {
        if self.state == PlaybackState::Playing {
            return;
        }
        let Some(sequence) = &self.current else {
            return;
        };

        let base = self.generator.now();
        for tone in &sequence.tones {
            self.generator.schedule_tone(base + tone.start_offset, tone.duration);
        }
        self.ends_at = Some(base + sequence.total_duration);
        self.state = PlaybackState::Playing;
    }

    /// End the session: silence immediately, cancel the pending auto-stop,
    /// and rearm the generator. No-op when already idle.
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Idle {
            return;
        }
        self.generator.rearm();
        self.ends_at = None;
        self.state = PlaybackState::Idle;
    }

    /// Dispatch to start or stop based on the current state.
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Idle => self.start(),
            PlaybackState::Playing => self.stop(),
        }
    }

    /// Drive the deferred auto-stop.
    ///
    /// Call periodically while playing; once the generator clock passes the
    /// session deadline the player stops itself.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.ends_at {
            if self.generator.now() >= deadline {
                self.stop();
            }
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }
}
