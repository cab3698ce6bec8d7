//!Non-repeating random selection over tone catalogs.
//!
//!All selection is rejection sampling: draw uniformly, throw the draw away
//!if it collides with the excluded value, draw again. On a catalog of `n`
//!tones a fresh non-repeating tone costs `n / (n - 1)` draws on average, and
//!regenerating an interval is accepted with probability `1 - 1 / (n (n - 1))`,
//!so even the smallest usable catalogs retry rarely. Catalogs too small for
//!the exclusion to ever succeed are rejected up front instead of looping.

use thiserror::Error;

use crate::random::IndexSource;
use crate::types::{Interval, Tone, ToneCatalog};

///Error encountered while sampling from a catalog.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    ///Catalog has no tones to draw from.
    #[error("cannot sample from an empty catalog")]
    EmptyCatalog,

    ///Catalog has fewer than two tones, so a draw that must differ from
    ///another value can never succeed.
    #[error("need at least 2 tones to avoid repetition, catalog has {0}")]
    DomainTooSmall(usize),
}

///Draw a uniform random tone from the catalog.
///
///Used to pick the first value of a session. No exclusion is applied.
pub fn sample_tone(catalog: &ToneCatalog, src: &mut impl IndexSource) -> Result<Tone, SampleError> {
    if catalog.is_empty() {
        return Err(SampleError::EmptyCatalog);
    }
    Ok(catalog.as_slice()[src.next_index(catalog.len())])
}

///Draw a uniform random tone from the catalog, different from `current`.
pub fn sample_next_tone(
    current: Tone,
    catalog: &ToneCatalog,
    src: &mut impl IndexSource,
) -> Result<Tone, SampleError> {
    if catalog.len() < 2 {
        return Err(SampleError::DomainTooSmall(catalog.len()));
    }
    loop {
        let tone = catalog.as_slice()[src.next_index(catalog.len())];
        if tone != current {
            return Ok(tone);
        }
    }
}

///Generate a random interval over the catalog.
///
///`first` is drawn uniformly, then `second` is redrawn until it differs
///from `first`, so the result is never a unison.
pub fn generate_interval(
    catalog: &ToneCatalog,
    src: &mut impl IndexSource,
) -> Result<Interval, SampleError> {
    if catalog.len() < 2 {
        return Err(SampleError::DomainTooSmall(catalog.len()));
    }
    let first = catalog.as_slice()[src.next_index(catalog.len())];
    let second = sample_next_tone(first, catalog, src)?;
    //The loop above guarantees the tones differ
    Ok(Interval::new(first, second).expect("second tone differs from first"))
}

///Generate a random interval over the catalog, different from `current`.
///
///Difference is componentwise: an interval repeats only when both its first
///and second tone match `current`, so swapping the two tones counts as a
///fresh interval.
pub fn sample_next_interval(
    current: Interval,
    catalog: &ToneCatalog,
    src: &mut impl IndexSource,
) -> Result<Interval, SampleError> {
    if catalog.len() < 2 {
        return Err(SampleError::DomainTooSmall(catalog.len()));
    }
    loop {
        let interval = generate_interval(catalog, src)?;
        if interval != current {
            return Ok(interval);
        }
    }
}
