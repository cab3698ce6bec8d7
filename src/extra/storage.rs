//! Extras aimed at storing rendered sound.
use std::collections::HashMap;
use std::{hash::Hash, rc::Rc};

use sealed::sealed;

use crate::types::Sound;

/// Trait for maps that cache rendered [`Sound`] behind [`Rc`]s.
///
/// An exercise replays the same few tones over and over, so whoever turns
/// tones into PCM only needs to do it once per distinct key.
///
/// # Examples
///
/// ```
/// # use std::collections::HashMap;
/// # use std::rc::Rc;
/// # use eartrain::types::{Sound, Tone};
/// # use eartrain::extra::storage::SoundCache;
/// let mut cache: HashMap<Tone, Rc<Sound>> = HashMap::new();
/// let c3: Tone = "C3".parse().unwrap();
///
/// let first = cache.render_with(c3, |_| Sound::new(vec![0.0; 8], 8));
/// // The second request returns the same allocation, the closure never runs.
/// let second = cache.render_with(c3, |_| unreachable!());
///
/// assert!(Rc::ptr_eq(&first, &second));
/// ```
#[sealed]
pub trait SoundCache<K> {
    /// Remove entries whose sound is not referenced outside the cache.
    fn trim(&mut self);

    /// Return the cached sound for `key`, rendering it first if absent.
    fn render_with(&mut self, key: K, render: impl FnOnce(&K) -> Sound) -> Rc<Sound>;
}

#[sealed]
impl<K: Eq + Hash> SoundCache<K> for HashMap<K, Rc<Sound>> {
    fn trim(&mut self) {
        self.retain(|_, sound| Rc::strong_count(sound) != 1);
    }

    fn render_with(&mut self, key: K, render: impl FnOnce(&K) -> Sound) -> Rc<Sound> {
        self.entry(key)
            .or_insert_with_key(|key| Rc::new(render(key)))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tone;

    fn tone(label: &str) -> Tone {
        label.parse().unwrap()
    }

    #[test]
    fn render_happens_once_per_key() {
        let mut cache: HashMap<Tone, Rc<Sound>> = HashMap::new();
        let mut renders = 0;

        let r1 = cache.render_with(tone("C3"), |_| {
            renders += 1;
            Sound::new(vec![0.1; 4], 4)
        });
        let r2 = cache.render_with(tone("C3"), |_| {
            renders += 1;
            Sound::new(vec![0.2; 4], 4)
        });

        assert_eq!(renders, 1);
        assert!(Rc::ptr_eq(&r1, &r2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_render_separately() {
        let mut cache: HashMap<Tone, Rc<Sound>> = HashMap::new();
        let r1 = cache.render_with(tone("C3"), |_| Sound::new(vec![0.1; 4], 4));
        let r2 = cache.render_with(tone("D3"), |_| Sound::new(vec![0.2; 4], 4));
        assert!(!Rc::ptr_eq(&r1, &r2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn forgotten_sounds_are_trimmed() {
        let mut cache: HashMap<Tone, Rc<Sound>> = HashMap::new();
        let kept = cache.render_with(tone("C3"), |_| Sound::new(vec![0.0; 4], 4));
        cache.render_with(tone("D3"), |_| Sound::new(vec![0.0; 4], 4));
        cache.render_with(tone("E3"), |_| Sound::new(vec![0.0; 4], 4));
        assert_eq!(cache.len(), 3);

        //Only C3 is still referenced outside the cache
        cache.trim();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key(&tone("C3")));
        drop(kept);
    }
}
