use tracing::{debug, debug_span};

use crate::translit::Transliterator;

/// Katakana → romaji with `a:`-style long vowels (e.g. イースタートー → `i:suta:to:`).
///
/// Total over all input: non-katakana text passes through unchanged.
pub fn kana2romaji(input: &str) -> String {
    kana2romaji_with(Transliterator::global(), input)
}

pub fn kana2romaji_with(translit: Transliterator<'_>, input: &str) -> String {
    let _span = debug_span!("kana2romaji", input_len = input.len()).entered();
    let romaji = translit.transliterate(input);
    debug!(output_len = romaji.len());
    romaji
}
