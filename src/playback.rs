//!Seam between exercise sessions and an audio engine.
//!
//!The engine is modelled after web synthesizers: it has a clock and a
//!single "play this tone for this long, starting then" entry point. Sessions
//!only schedule against it; producing actual audio is the engine's business.

use thiserror::Error;

use crate::types::Tone;

///How long one exercise tone sounds, in seconds (a quarter note at 120 BPM).
pub const NOTE_LEN: f64 = 0.5;

///Delay between the two tones of an interval, in seconds.
pub const INTERVAL_OFFSET: f64 = 1.0;

///Error message coming from an audio backend.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct PlaybackError(pub String);

///An audio engine that can schedule tones on its own clock.
pub trait Player {
    ///Current time on the player's clock, in seconds.
    fn now(&self) -> f64;

    ///Play `tone` for `duration` seconds, starting at time `at`.
    fn trigger_attack_release(
        &mut self,
        tone: Tone,
        duration: f64,
        at: f64,
    ) -> Result<(), PlaybackError>;
}
