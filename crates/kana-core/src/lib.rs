//! Katakana romanization for speech-recognition pronunciation dictionaries.
//!
//! Two stateless operations share one transliteration step:
//! [`kana2romaji`] (katakana → Latin with `a:`-style long vowels) and
//! [`kana2voca`] (the same romanization reshaped into space-delimited
//! phoneme tokens for a Julius `.voca` dictionary).

pub mod remap;
pub mod romaji;
pub mod translit;
pub mod unicode;
pub mod voca;

#[cfg(test)]
mod tests;

pub use romaji::{kana2romaji, kana2romaji_with};
pub use translit::{KatakanaTrie, TranslitConfigError, Transliterator};
pub use voca::{kana2voca, kana2voca_with};
