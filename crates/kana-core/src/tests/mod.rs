//! Cross-module tests for the two public operations.

mod properties;

use crate::translit::Transliterator;
use crate::unicode::hiragana_to_katakana;
use crate::{kana2romaji, kana2voca};

#[test]
fn test_romaji_and_voca_share_transliteration() {
    // Without ン or small kana, voca is romaji split into tokens.
    let input = "イースタートー";
    let romaji = kana2romaji(input);
    let voca = kana2voca(input);
    assert_eq!(voca.replace(' ', ""), romaji);
}

#[test]
fn test_nasal_only_differs_in_voca() {
    assert_eq!(kana2romaji("ナンナ"), "nanna");
    assert_eq!(kana2voca("ナンナ"), "n a N n a ");
}

#[test]
fn test_hiragana_after_normalization() {
    let katakana = hiragana_to_katakana("らーめん");
    assert_eq!(kana2romaji(&katakana), "ra:men");
    assert_eq!(kana2voca(&katakana), "r a: m e N ");
}

#[test]
fn test_transliterator_is_shareable_across_threads() {
    let t = Transliterator::global();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || t.transliterate("イースタートー")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "i:suta:to:");
    }
}
