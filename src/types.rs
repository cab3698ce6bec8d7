//!Types that the library operates on.

use serde::{Deserialize, Serialize};
use slice_dst::SliceWithHeader;
use std::{fmt, str::FromStr};
use thiserror::Error;

///Reference pitch of A4, in Hz.
pub const A4: f32 = 440.0;

///Natural note letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    ///Semitones above C within the octave.
    pub fn semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

///Error encountered while parsing a tone label.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseToneError {
    ///Label is empty.
    #[error("empty tone label")]
    Empty,

    ///First character is not a note letter.
    #[error("bad note letter {0:?}")]
    BadLetter(char),

    ///The characters after the letter are not an octave number.
    #[error("bad octave {0:?}")]
    BadOctave(String),
}

///A named pitch, like `C3` or `F#4`.
///
///Tones serialize through their label, which is also the form an audio
///backend is given to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tone {
    letter: Letter,
    sharp: bool,
    octave: i8,
}

impl Tone {
    ///Create a new tone.
    pub fn new(letter: Letter, sharp: bool, octave: i8) -> Tone {
        Tone {
            letter,
            sharp,
            octave,
        }
    }

    ///Create a tone without an accidental.
    pub fn natural(letter: Letter, octave: i8) -> Tone {
        Tone::new(letter, false, octave)
    }

    #[allow(missing_docs)]
    pub fn letter(self) -> Letter {
        self.letter
    }

    #[allow(missing_docs)]
    pub fn octave(self) -> i8 {
        self.octave
    }

    ///MIDI note number, with C-1 at 0 and middle C (C4) at 60.
    pub fn midi(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.letter.semitone() as i32 + self.sharp as i32
    }

    ///Pitch in Hz, equal temperament around [`A4`].
    pub fn frequency(self) -> f32 {
        A4 * 2.0_f32.powf((self.midi() - 69) as f32 / 12.0)
    }

    ///The textual label, same as the `Display` form.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter.as_char(),
            if self.sharp { "#" } else { "" },
            self.octave
        )
    }
}

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseToneError::Empty)?;
        let letter = Letter::from_char(first).ok_or(ParseToneError::BadLetter(first))?;
        let rest = chars.as_str();
        let (sharp, octave) = match rest.strip_prefix('#') {
            Some(oct) => (true, oct),
            None => (false, rest),
        };
        let octave = octave
            .parse::<i8>()
            .map_err(|_| ParseToneError::BadOctave(octave.to_owned()))?;
        Ok(Tone::new(letter, sharp, octave))
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> String {
        tone.to_string()
    }
}

impl TryFrom<String> for Tone {
    type Error = ParseToneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

///Error encountered while assembling a tone catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    ///The same tone appears twice.
    #[error("duplicate tone {0}")]
    Duplicate(Tone),

    ///Catalog text is not a flat JSON array of tone labels.
    #[error("bad catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

///Ordered collection of unique tones available to an exercise session.
///
///The catalog is fixed once the session starts. Uniqueness is checked at
///construction so that the catalog's length is also the size of the sampling
///domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tone>")]
pub struct ToneCatalog(Vec<Tone>);

impl ToneCatalog {
    ///Create a catalog, rejecting duplicate tones.
    pub fn new(tones: Vec<Tone>) -> Result<Self, CatalogError> {
        for (i, tone) in tones.iter().enumerate() {
            if tones[..i].contains(tone) {
                return Err(CatalogError::Duplicate(*tone));
            }
        }
        Ok(ToneCatalog(tones))
    }

    ///Parse a catalog from a flat JSON array of labels, like
    ///`["C3", "E3", "G3"]`.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let tones: Vec<Tone> = serde_json::from_str(text)?;
        Self::new(tones)
    }

    ///The eight naturals from C3 up to C4.
    pub fn middle_octave() -> Self {
        use Letter::*;
        let mut tones: Vec<Tone> = [C, D, E, F, G, A, B]
            .into_iter()
            .map(|l| Tone::natural(l, 3))
            .collect();
        tones.push(Tone::natural(C, 4));
        ToneCatalog(tones)
    }

    ///Number of tones in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///Tone at the given position.
    pub fn get(&self, index: usize) -> Option<Tone> {
        self.0.get(index).copied()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, tone: Tone) -> bool {
        self.0.contains(&tone)
    }

    ///Tones in catalog order.
    pub fn as_slice(&self) -> &[Tone] {
        self.0.as_slice()
    }
}

impl TryFrom<Vec<Tone>> for ToneCatalog {
    type Error = CatalogError;

    fn try_from(tones: Vec<Tone>) -> Result<Self, Self::Error> {
        Self::new(tones)
    }
}

///Error encountered while creating an interval.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntervalError {
    ///Both tones are the same.
    #[error("interval needs two distinct tones, got {0} twice")]
    Unison(Tone),
}

///An ordered pair of distinct tones, played one after the other.
///
///The pair is ordered: rising and falling versions of the same two tones are
///different exercises, so `(A3, C3)` does not equal `(C3, A3)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    first: Tone,
    second: Tone,
}

impl Interval {
    ///Create an interval. Unisons are rejected.
    pub fn new(first: Tone, second: Tone) -> Result<Self, IntervalError> {
        if first == second {
            return Err(IntervalError::Unison(first));
        }
        Ok(Interval { first, second })
    }

    #[allow(missing_docs)]
    pub fn first(self) -> Tone {
        self.first
    }

    #[allow(missing_docs)]
    pub fn second(self) -> Tone {
        self.second
    }

    ///Both labels, space-joined, in playing order.
    pub fn label(self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

///Immutable slice of mono PCM data.
pub struct Sound(Box<SliceWithHeader<u32, f32>>);

impl Sound {
    ///Create new sound.
    pub fn new(data: Vec<f32>, sampling_rate: u32) -> Sound {
        Sound(SliceWithHeader::new(sampling_rate, data))
    }

    ///Get sampling rate.
    pub fn sampling_rate(&self) -> u32 {
        self.0.header
    }

    ///Get data.
    pub fn data(&self) -> &[f32] {
        self.0.slice.as_ref()
    }

    ///Length in seconds.
    pub fn duration(&self) -> f32 {
        self.data().len() as f32 / self.sampling_rate() as f32
    }
}

impl std::convert::AsRef<[f32]> for Sound {
    fn as_ref(&self) -> &[f32] {
        self.data()
    }
}
