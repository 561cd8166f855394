//! Character-level Unicode classification for Japanese text.

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC) and the middle dot ・ (U+30FB).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Check if a string is non-empty and consists only of katakana.
pub fn is_katakana_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            // Only letters and iteration marks have a counterpart 0x60 above.
            if matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}') {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_katakana_text() {
        assert!(is_katakana_text("カタカナ"));
        assert!(is_katakana_text("ラーメン"));
        assert!(!is_katakana_text("かな"));
        assert!(!is_katakana_text("abc"));
        assert!(!is_katakana_text(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
        assert_eq!(hiragana_to_katakana("\u{309B}"), "\u{309B}");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(!is_katakana('a'));
    }
}
