//! Phrase sampling.
//!
//! The random source is chosen once per run and injected into the
//! generator; see [`RandomSource::detect`].

mod phrase;
mod rng;

pub use phrase::{Phrase, PhraseGenerator, PHRASE_WORDS};
pub use rng::RandomSource;
