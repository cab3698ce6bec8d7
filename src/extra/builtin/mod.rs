//! Ready-made collaborators: an offline synthesizer and a text panel.

mod display;
mod synth;

pub use display::TextPanel;
pub use synth::OfflineSynth;
