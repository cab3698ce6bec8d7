//!Exercise sessions.
//!
//!A session owns the value being quizzed (a tone or an interval) and the
//!catalog it was drawn from. User actions map onto methods: `play` schedules
//!the current value on a [`Player`], `advance` swaps in a fresh non-repeating
//!value, and `reveal`/`hide` drive whatever shows the answer text. There is
//!no shared global state; every collaborator is passed in.

use crate::playback::{Player, PlaybackError, INTERVAL_OFFSET, NOTE_LEN};
use crate::random::IndexSource;
use crate::sampler::{
    generate_interval, sample_next_interval, sample_next_tone, sample_tone, SampleError,
};
use crate::types::{Interval, Tone, ToneCatalog};

///Prompt shown while the answer is hidden.
pub const PROMPT: &str = "Press \"reveal\" for revelation";

///Anything that can show the answer text or fall back to the prompt.
pub trait Revelation {
    ///Show the answer.
    fn set_revealed_text(&mut self, text: &str);

    ///Mask the answer behind the prompt again.
    fn reset_to_prompt(&mut self);
}

///Tone recognition session: one random tone at a time.
pub struct ToneSession {
    catalog: ToneCatalog,
    current: Tone,
}

impl ToneSession {
    ///Start a session with a random initial tone.
    pub fn start(catalog: ToneCatalog, src: &mut impl IndexSource) -> Result<Self, SampleError> {
        let current = sample_tone(&catalog, src)?;
        Ok(ToneSession { catalog, current })
    }

    ///The tone currently being quizzed.
    pub fn current(&self) -> Tone {
        self.current
    }

    #[allow(missing_docs)]
    pub fn catalog(&self) -> &ToneCatalog {
        &self.catalog
    }

    ///Replace the current tone with a fresh draw that is guaranteed to
    ///differ from it, and return the new tone.
    pub fn advance(&mut self, src: &mut impl IndexSource) -> Result<Tone, SampleError> {
        self.current = sample_next_tone(self.current, &self.catalog, src)?;
        Ok(self.current)
    }

    ///Schedule the current tone on the player, starting now.
    pub fn play(&self, player: &mut impl Player) -> Result<(), PlaybackError> {
        let now = player.now();
        player.trigger_attack_release(self.current, NOTE_LEN, now)
    }

    ///Show the current tone's label.
    pub fn reveal(&self, panel: &mut impl Revelation) {
        panel.set_revealed_text(&self.current.label());
    }

    ///Mask the answer again.
    pub fn hide(&self, panel: &mut impl Revelation) {
        panel.reset_to_prompt();
    }
}

///Interval recognition session: one random interval at a time.
pub struct IntervalSession {
    catalog: ToneCatalog,
    current: Interval,
}

impl IntervalSession {
    ///Start a session with a random initial interval.
    pub fn start(catalog: ToneCatalog, src: &mut impl IndexSource) -> Result<Self, SampleError> {
        let current = generate_interval(&catalog, src)?;
        Ok(IntervalSession { catalog, current })
    }

    ///The interval currently being quizzed.
    pub fn current(&self) -> Interval {
        self.current
    }

    #[allow(missing_docs)]
    pub fn catalog(&self) -> &ToneCatalog {
        &self.catalog
    }

    ///Replace the current interval with a fresh one that is not
    ///componentwise equal to it, and return the new interval.
    pub fn advance(&mut self, src: &mut impl IndexSource) -> Result<Interval, SampleError> {
        self.current = sample_next_interval(self.current, &self.catalog, src)?;
        Ok(self.current)
    }

    ///Schedule both tones on the player: the first starting now, the second
    ///one [`INTERVAL_OFFSET`] later.
    pub fn play(&self, player: &mut impl Player) -> Result<(), PlaybackError> {
        let now = player.now();
        player.trigger_attack_release(self.current.first(), NOTE_LEN, now)?;
        player.trigger_attack_release(self.current.second(), NOTE_LEN, now + INTERVAL_OFFSET)
    }

    ///Show both labels, space-joined, in playing order.
    pub fn reveal(&self, panel: &mut impl Revelation) {
        panel.set_revealed_text(&self.current.label());
    }

    ///Mask the answer again.
    pub fn hide(&self, panel: &mut impl Revelation) {
        panel.reset_to_prompt();
    }
}
