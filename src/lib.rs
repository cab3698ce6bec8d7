#![warn(missing_docs)]
//!Building blocks for ear training exercises.
//!
//!The crate covers the whole loop of a tone or interval recognition
//!exercise: a fixed [catalog](types::ToneCatalog) of tones, [non-repeating
//!random selection](sampler) over it, a [session](session) holding the value
//!currently being quizzed, and seams for the [audio engine](playback::Player)
//!and the [answer display](session::Revelation). Ready-made collaborators (an
//!offline synthesizer and a text panel) live in [`extra::builtin`].
//!
//!Randomness is always injected through [`random::IndexSource`], so exercise
//!runs can be fresh, seeded, or fully scripted.

pub mod extra;
pub mod playback;
pub mod random;
pub mod sampler;
pub mod session;
pub mod types;
