//! Katakana → Latin transliteration.
//!
//! A table-driven rule (embedded TOML, overridable once at startup) plus the
//! long-vowel remap that turns macron vowels into `a:`-style digraphs.

mod config;
mod rules;
mod table;
mod trie;

pub use config::{parse_katakana_toml, TranslitConfigError};
pub use rules::katakana_to_latin;
pub use trie::KatakanaTrie;

pub(crate) use rules::HATSUON;

use crate::remap::{apply_table, LONG_VOWELS};

/// Returns the embedded default katakana table.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

/// Katakana → Latin rule followed by the long-vowel remap.
///
/// Holds only a shared reference to an immutable trie, so it is `Copy` and
/// can be used from any number of threads.
#[derive(Clone, Copy)]
pub struct Transliterator<'a> {
    trie: &'a KatakanaTrie,
}

impl Transliterator<'static> {
    /// Transliterator over the process-wide table.
    pub fn global() -> Self {
        Self {
            trie: KatakanaTrie::global(),
        }
    }
}

impl<'a> Transliterator<'a> {
    pub fn new(trie: &'a KatakanaTrie) -> Self {
        Self { trie }
    }

    pub fn transliterate(&self, input: &str) -> String {
        let latin = katakana_to_latin(self.trie, input);
        apply_table(&latin, LONG_VOWELS)
    }
}
