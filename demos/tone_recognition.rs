use eartrain::{
    extra::builtin::{OfflineSynth, TextPanel},
    random::ThreadRandom,
    session::ToneSession,
    types::ToneCatalog,
};
use std::{fs::OpenOptions, io::Write, path::Path};

//Runs a few rounds of tone recognition and writes the audio that a learner
//would hear as pcm_f32le (mono, 48 kHz).
fn main() {
    let mut random = ThreadRandom::new();
    let mut session = ToneSession::start(ToneCatalog::middle_octave(), &mut random)
        .expect("middle octave catalog is not empty");
    let mut synth = OfflineSynth::new(48000);
    let mut panel = TextPanel::new();

    for round in 1..=4 {
        session.play(&mut synth).expect("rendering failed");
        session.reveal(&mut panel);
        println!("round {}: {}", round, panel.text());

        session.hide(&mut panel);
        session
            .advance(&mut random)
            .expect("catalog has more than one tone");
    }

    let sound = synth.take_sound();
    let pcm: Vec<u8> = sound.data().iter().flat_map(|s| s.to_le_bytes()).collect();

    let path = Path::new("tone_recognition.pcm");
    let mut file = match OpenOptions::new().write(true).create(true).open(path) {
        Ok(file) => file,
        Err(e) => panic!("couldn't open {}: {}", path.display(), e),
    };
    file.write_all(&pcm).unwrap();
}
