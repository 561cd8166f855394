//! Fixed exact-substring substitution tables.
//!
//! Within a table, no key may occur inside another key or inside any
//! replacement. That keeps application order irrelevant and makes every
//! table idempotent; extensions must preserve it.

/// Macron vowels → colon-suffixed long vowels.
pub const LONG_VOWELS: &[(&str, &str)] = &[
    ("\u{0101}", "a:"),
    ("\u{0113}", "e:"),
    ("\u{012B}", "i:"),
    ("\u{014D}", "o:"),
    ("\u{016B}", "u:"),
];

/// Replacement for the unmarked syllabic nasal.
pub const SYLLABIC_NASAL: &str = "N";

/// Small-kana marker emitted by the transliteration table, and its
/// replacement (the glottal stop / geminate token).
pub const SMALL_KANA_MARK: &str = "~";
pub const GLOTTAL_STOP: &str = "q";

/// Replace every occurrence of each key, in table order.
pub fn apply_table<K, V>(text: &str, table: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    table.iter().fold(text.to_string(), |acc, (from, to)| {
        let from = from.as_ref();
        if acc.contains(from) {
            acc.replace(from, to.as_ref())
        } else {
            acc
        }
    })
}
