//! Property-based tests over arbitrary and katakana-heavy input.

use proptest::prelude::*;

use crate::remap::{apply_table, LONG_VOWELS};
use crate::{kana2romaji, kana2voca};

const MACRONS: [char; 5] = ['\u{0101}', '\u{0113}', '\u{012B}', '\u{014D}', '\u{016B}'];

fn arb_katakana_char() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => (0x30A1u32..=0x30FAu32).prop_map(|c| char::from_u32(c).unwrap()),
        2 => Just('ー'),
        2 => Just('ン'),
        2 => Just('ッ'),
        1 => prop::sample::select(vec!['a', 'N', ' ', '~', '[', ']', ':', 'あ', '漢', '\u{0304}']),
    ]
}

fn arb_kana_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_katakana_char(), 0..24).prop_map(|v| v.into_iter().collect())
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_kana_text(), any::<String>()]
}

proptest! {
    #[test]
    fn voca_alphabet_is_closed(input in arb_text()) {
        let out = kana2voca(&input);
        prop_assert!(
            out.chars().all(|c| c.is_ascii_lowercase() || matches!(c, 'N' | ':' | '@' | ' ')),
            "unexpected character in {out:?}"
        );
    }

    #[test]
    fn voca_has_no_double_space(input in arb_text()) {
        prop_assert!(!kana2voca(&input).contains("  "));
    }

    #[test]
    fn voca_has_no_leading_space(input in arb_text()) {
        let out = kana2voca(&input);
        prop_assert!(!out.starts_with(' '), "leading space in {out:?}");
    }

    #[test]
    fn romaji_has_no_macron_vowels(input in arb_kana_text()) {
        let out = kana2romaji(&input);
        prop_assert!(!out.chars().any(|c| MACRONS.contains(&c)), "macron in {out:?}");
    }

    #[test]
    fn long_vowel_remap_is_idempotent(input in arb_text()) {
        let once = apply_table(&input, LONG_VOWELS);
        prop_assert_eq!(apply_table(&once, LONG_VOWELS), once);
    }

    #[test]
    fn operations_are_deterministic(input in arb_text()) {
        prop_assert_eq!(kana2romaji(&input), kana2romaji(&input));
        prop_assert_eq!(kana2voca(&input), kana2voca(&input));
    }

    #[test]
    fn every_nasal_yields_an_n_token(input in arb_kana_text()) {
        let nasals = input.chars().filter(|&c| c == 'ン').count();
        let n_tokens = kana2voca(&input)
            .split_whitespace()
            .filter(|t| t.starts_with('N'))
            .count();
        let n_in_input = input.chars().filter(|&c| c == 'N').count();
        prop_assert_eq!(n_tokens, nasals + n_in_input);
    }
}
