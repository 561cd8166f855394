//! Julius `.voca` pronunciation strings.
//!
//! The romanization is reshaped into space-delimited phoneme tokens by an
//! ordered cascade of regex substitutions:
//!
//! 1. `[aiueoNq]:?`: each nucleus (vowel, syllabic nasal, glottal stop,
//!    optional long mark) becomes its own token.
//! 2. `[^aiueoNq\s]{1,2}`: consonant runs of one or two letters become
//!    tokens. Whitespace is not part of a run, so the separators from rule 1
//!    never split a cluster such as `ky` or `ts`.
//! 3. `[^a-zN:@\s]`: anything outside the token alphabet is dropped.
//! 4. `\s+`: separators collapse to a single space.
//! 5. `^\s+`: a leading separator is dropped. It is left behind when the
//!    first character is outside the alphabet (`・a` → `・ a ` → ` a `).
//!
//! Each rule consumes the full output of the previous one.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, debug_span};

use crate::remap::{apply_table, GLOTTAL_STOP, SMALL_KANA_MARK, SYLLABIC_NASAL};
use crate::translit::{Transliterator, HATSUON};

/// Brackets wrapped around ン before transliteration. They are not katakana,
/// so they survive the rule as literal ASCII.
pub const NASAL_MARK_OPEN: &str = "[[";
pub const NASAL_MARK_CLOSE: &str = "]]";

static CASCADE: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    [
        (rule(r"[aiueoNq]:?"), "${0} "),
        (rule(r"[^aiueoNq\s]{1,2}"), "${0} "),
        (rule(r"[^a-zN:@\s]"), ""),
        (rule(r"\s+"), " "),
        (rule(r"^\s+"), ""),
    ]
});

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("voca cascade pattern must compile")
}

/// Katakana → `.voca` phoneme tokens (e.g. イースタートー → `i: s u t a: t o: `).
///
/// The trailing separator produced by the cascade is kept as-is.
pub fn kana2voca(input: &str) -> String {
    kana2voca_with(Transliterator::global(), input)
}

pub fn kana2voca_with(translit: Transliterator<'_>, input: &str) -> String {
    let _span = debug_span!("kana2voca", input_len = input.len()).entered();

    let marked = premark(input);
    let latin = translit.transliterate(&marked);
    let unmark = [
        (nasal_marker(translit), SYLLABIC_NASAL),
        (SMALL_KANA_MARK.to_string(), GLOTTAL_STOP),
    ];
    let romaji = apply_table(&latin, &unmark);
    let voca = shape_tokens(&romaji);

    debug!(romaji_len = romaji.len(), output_len = voca.len());
    voca
}

/// Wrap every ン in the nasal marker.
fn premark(input: &str) -> String {
    input.replace(
        HATSUON,
        &format!("{NASAL_MARK_OPEN}{HATSUON}{NASAL_MARK_CLOSE}"),
    )
}

/// What a marked ン looks like after transliteration. Derived from the
/// transliterator itself so the premark and unmark steps always agree.
fn nasal_marker(translit: Transliterator<'_>) -> String {
    translit.transliterate(&premark(&HATSUON.to_string()))
}

/// Run the token-shaping cascade over a romanized string.
pub fn shape_tokens(romaji: &str) -> String {
    CASCADE
        .iter()
        .fold(romaji.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
