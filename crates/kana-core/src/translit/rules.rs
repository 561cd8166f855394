//! Left-to-right longest-match scan with the context rules that a flat
//! table cannot express: sokuon gemination, chōon lengthening and the
//! hatsuon apostrophe.

use super::trie::KatakanaTrie;

pub(crate) const SOKUON: char = 'ッ';
pub(crate) const CHOON: char = 'ー';
pub(crate) const HATSUON: char = 'ン';

const COMBINING_MACRON: char = '\u{0304}';

/// Consonants that ッ doubles. `n`, `y` and `w` keep the `~tsu` spelling.
const GEMINATE_CONSONANTS: &str = "bcdfghjkmprstvz";

/// Transliterate katakana into Latin. Characters without a table entry are
/// copied through unchanged.
pub fn katakana_to_latin(trie: &KatakanaTrie, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];

        if ch == CHOON {
            lengthen(&mut out);
            rest = after;
            continue;
        }

        if ch == SOKUON {
            if let Some(prefix) = next_unit(trie, after).and_then(geminate) {
                out.push_str(prefix);
                rest = after;
                continue;
            }
        }

        match trie.longest_match(rest) {
            Some((len, latin)) => {
                out.push_str(latin);
                let next = &rest[len..];
                if ch == HATSUON
                    && len == ch.len_utf8()
                    && next_unit(trie, next).is_some_and(starts_with_vowel_or_y)
                {
                    out.push('\'');
                }
                rest = next;
            }
            None => {
                out.push(ch);
                rest = after;
            }
        }
    }

    out
}

fn next_unit<'t>(trie: &'t KatakanaTrie, text: &str) -> Option<&'t str> {
    trie.longest_match(text).map(|(_, latin)| latin)
}

/// Leading consonant written for ッ in front of `latin`, if it doubles.
fn geminate(latin: &str) -> Option<&str> {
    if latin.starts_with("ch") {
        return Some("t");
    }
    let first = latin.chars().next()?;
    GEMINATE_CONSONANTS
        .contains(first)
        .then(|| &latin[..first.len_utf8()])
}

fn starts_with_vowel_or_y(latin: &str) -> bool {
    matches!(
        latin.chars().next(),
        Some('a' | 'i' | 'u' | 'e' | 'o' | 'y')
    )
}

/// Apply ー to the text emitted so far.
fn lengthen(out: &mut String) {
    match out.pop() {
        Some(last) => match macron_vowel(last) {
            Some(long) => out.push(long),
            None => {
                out.push(last);
                out.push(COMBINING_MACRON);
            }
        },
        None => out.push(COMBINING_MACRON),
    }
}

fn macron_vowel(vowel: char) -> Option<char> {
    match vowel {
        'a' => Some('\u{0101}'),
        'e' => Some('\u{0113}'),
        'i' => Some('\u{012B}'),
        'o' => Some('\u{014D}'),
        'u' => Some('\u{016B}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(s: &str) -> String {
        katakana_to_latin(KatakanaTrie::global(), s)
    }

    #[test]
    fn test_basic_syllables() {
        assert_eq!(latin("カタカナ"), "katakana");
        assert_eq!(latin("シチツフ"), "shichitsufu");
    }

    #[test]
    fn test_youon_longest_match() {
        assert_eq!(latin("キャ"), "kya");
        assert_eq!(latin("ジョ"), "jo");
        assert_eq!(latin("ヴァイオリン"), "vaiorin");
    }

    #[test]
    fn test_choon_after_vowel() {
        assert_eq!(latin("アー"), "\u{0101}");
        assert_eq!(latin("イースタートー"), "\u{012B}sut\u{0101}t\u{014D}");
        assert_eq!(latin("ティー"), "t\u{012B}");
    }

    #[test]
    fn test_choon_without_vowel() {
        assert_eq!(latin("ー"), "\u{0304}");
        assert_eq!(latin("ンー"), "n\u{0304}");
        // A second ー cannot lengthen an already-long vowel.
        assert_eq!(latin("アーー"), "\u{0101}\u{0304}");
    }

    #[test]
    fn test_sokuon_gemination() {
        assert_eq!(latin("カッパ"), "kappa");
        assert_eq!(latin("キャッチ"), "kyatchi");
        assert_eq!(latin("ベッド"), "beddo");
    }

    #[test]
    fn test_sokuon_standalone() {
        assert_eq!(latin("ッ"), "~tsu");
        assert_eq!(latin("ッア"), "~tsua");
        assert_eq!(latin("ッナ"), "~tsuna");
        assert_eq!(latin("ッx"), "~tsux");
    }

    #[test]
    fn test_hatsuon_apostrophe() {
        assert_eq!(latin("アンイ"), "an'i");
        assert_eq!(latin("シンヤ"), "shin'ya");
        assert_eq!(latin("コンニチハ"), "konnichiha");
        assert_eq!(latin("ン"), "n");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(latin(""), "");
        assert_eq!(latin("abc"), "abc");
        assert_eq!(latin("ひらがな"), "ひらがな");
        assert_eq!(latin("[[ン]]"), "[[n]]");
    }

    #[test]
    fn test_geminate_prefix() {
        assert_eq!(geminate("ka"), Some("k"));
        assert_eq!(geminate("chi"), Some("t"));
        assert_eq!(geminate("na"), None);
        assert_eq!(geminate("a"), None);
        assert_eq!(geminate("~ya"), None);
    }
}
