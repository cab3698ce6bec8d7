use std::collections::HashMap;
use std::rc::Rc;

use dasp::{signal, slice::add_in_place, Signal};

use crate::extra::storage::SoundCache;
use crate::playback::{Player, PlaybackError};
use crate::types::{Sound, Tone};

///Output level of a rendered note, safely below clipping even when the two
///tones of an interval overlap.
const LEVEL: f64 = 0.45;

///Length of the attack and release ramps, in seconds.
const RAMP: f64 = 0.01;

/// Player that renders scheduled tones into a mono PCM buffer.
///
/// `now()` is the end of the material rendered so far, so consecutive plays
/// append while tones scheduled against one `now` reading can overlap. Each
/// distinct (tone, length) pair is synthesized once and cached.
pub struct OfflineSynth {
    sampling_rate: u32,
    buffer: Vec<f32>,
    cache: HashMap<(Tone, usize), Rc<Sound>>,
}

impl OfflineSynth {
    ///Create a synth rendering at the given sampling rate.
    pub fn new(sampling_rate: u32) -> Self {
        OfflineSynth {
            sampling_rate,
            buffer: Vec::new(),
            cache: HashMap::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    ///Finish rendering and hand over the buffer.
    pub fn take_sound(self) -> Sound {
        Sound::new(self.buffer, self.sampling_rate)
    }
}

impl Player for OfflineSynth {
    fn now(&self) -> f64 {
        self.buffer.len() as f64 / self.sampling_rate as f64
    }

    fn trigger_attack_release(
        &mut self,
        tone: Tone,
        duration: f64,
        at: f64,
    ) -> Result<(), PlaybackError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PlaybackError(format!("bad note duration: {duration}")));
        }
        if !at.is_finite() || at < 0.0 {
            return Err(PlaybackError(format!("bad start time: {at}")));
        }
        let rate = self.sampling_rate;
        let start = (at * rate as f64).round() as usize;
        let frames = (duration * rate as f64).ceil() as usize;

        let note = self
            .cache
            .render_with((tone, frames), |&(tone, frames)| {
                render_note(tone, frames, rate)
            });

        let end = start + frames;
        if self.buffer.len() < end {
            self.buffer.resize(end, 0.0);
        }
        add_in_place(&mut self.buffer[start..end], note.data());
        Ok(())
    }
}

///Sine note with linear attack and release ramps to avoid clicks.
fn render_note(tone: Tone, frames: usize, sampling_rate: u32) -> Sound {
    let rate = sampling_rate as f64;
    let ramp = ((rate * RAMP) as usize).min(frames / 2).max(1);
    let wave = signal::rate(rate).const_hz(tone.frequency() as f64).sine();
    let data = wave
        .take(frames)
        .enumerate()
        .map(|(i, s)| {
            let env = if i < ramp {
                i as f64 / ramp as f64
            } else if i >= frames - ramp {
                (frames - i) as f64 / ramp as f64
            } else {
                1.0
            };
            (s * env * LEVEL) as f32
        })
        .collect();
    Sound::new(data, sampling_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{INTERVAL_OFFSET, NOTE_LEN};
    use crate::random::ScriptedIndices;
    use crate::session::IntervalSession;
    use crate::types::ToneCatalog;

    const RATE: u32 = 48000;

    fn c3() -> Tone {
        "C3".parse().unwrap()
    }

    #[test]
    fn rendering_advances_the_clock() {
        let mut synth = OfflineSynth::new(RATE);
        assert_eq!(synth.now(), 0.0);

        synth.trigger_attack_release(c3(), 0.5, synth.now()).unwrap();
        assert!((synth.now() - 0.5).abs() < 1e-3);

        let sound = synth.take_sound();
        assert_eq!(sound.sampling_rate(), RATE);
        assert_eq!(sound.data().len(), (0.5 * RATE as f64) as usize);
    }

    #[test]
    fn rendered_note_is_not_silence() {
        let mut synth = OfflineSynth::new(RATE);
        synth.trigger_attack_release(c3(), 0.25, 0.0).unwrap();
        let sound = synth.take_sound();
        let peak = sound.data().iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak > 0.3);
        assert!(peak <= LEVEL as f32 + 1e-3);
    }

    #[test]
    fn repeated_tones_render_once() {
        let mut synth = OfflineSynth::new(RATE);
        synth.trigger_attack_release(c3(), 0.5, 0.0).unwrap();
        synth.trigger_attack_release(c3(), 0.5, 1.0).unwrap();
        synth.trigger_attack_release(c3(), 0.25, 2.0).unwrap();
        //Same tone at a different length is a separate render
        assert_eq!(synth.cache.len(), 2);
    }

    #[test]
    fn bad_requests_are_refused() {
        let mut synth = OfflineSynth::new(RATE);
        assert!(synth.trigger_attack_release(c3(), 0.0, 0.0).is_err());
        assert!(synth.trigger_attack_release(c3(), -1.0, 0.0).is_err());
        assert!(synth.trigger_attack_release(c3(), 0.5, -0.1).is_err());
        assert!(synth.trigger_attack_release(c3(), f64::NAN, 0.0).is_err());
    }

    #[test]
    fn interval_play_leaves_a_gap_between_tones() {
        let mut src = ScriptedIndices::new(vec![0, 1]);
        let session = IntervalSession::start(ToneCatalog::middle_octave(), &mut src).unwrap();
        let mut synth = OfflineSynth::new(RATE);
        session.play(&mut synth).unwrap();

        let sound = synth.take_sound();
        let expected = ((INTERVAL_OFFSET + NOTE_LEN) * RATE as f64) as usize;
        assert_eq!(sound.data().len(), expected);

        //Between the first tone's end and the second tone's start is silence
        let gap_start = (NOTE_LEN * RATE as f64) as usize + 1;
        let gap_end = (INTERVAL_OFFSET * RATE as f64) as usize - 1;
        assert!(sound.data()[gap_start..gap_end].iter().all(|&s| s == 0.0));
    }
}
