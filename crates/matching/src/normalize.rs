//! Text canonicalization shared by every comparison in the engine.
//!
//! Catalog and pantry strings are never compared raw: both sides go through
//! [`normalize`] first, so `"Ｅｇｇ "` and `"egg"` are the same ingredient.

use std::sync::LazyLock;

use regex::Regex;

/// Distance between a full-width Latin letter/digit and its ASCII form.
pub const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Every dash-like character collapses to this one.
pub const CANONICAL_DASH: &str = "-";

// hyphen..horizontal bar, minus sign, wave dash, katakana long-vowel mark,
// full-width hyphen-minus and full-width tilde
static DASH_VARIANTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{2010}-\u{2015}\u{2212}\u{301C}\u{30FC}\u{FF0D}\u{FF5E}]")
        .expect("dash variant pattern is valid")
});

/// Canonicalize ingredient or recipe text for comparison.
///
/// Lower-cases, folds full-width Latin letters and digits to half-width,
/// maps dash variants to `-` and trims surrounding whitespace (ideographic
/// space included). The result is a fixed point: normalizing it again is a
/// no-op.
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(to_half_width).collect();

    DASH_VARIANTS
        .replace_all(&folded, CANONICAL_DASH)
        .trim()
        .to_string()
}

fn to_half_width(ch: char) -> char {
    match ch {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(ch as u32 - FULL_WIDTH_OFFSET).unwrap_or(ch)
        }
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Egg\t"), "egg");
        assert_eq!(normalize("\u{3000}卵\u{3000}"), "卵");
    }

    #[test]
    fn test_full_width_letters_and_digits_fold_to_ascii() {
        assert_eq!(normalize("ＥＧＧ"), "egg");
        assert_eq!(normalize("ｐｏｒｋ１２３"), "pork123");
        assert_eq!(normalize("Ｂａｃｏｎ"), "bacon");
    }

    #[test]
    fn test_dash_variants_collapse() {
        assert_eq!(normalize("カレー"), "カレ-");
        assert_eq!(normalize("カレ−"), "カレ-");
        assert_eq!(normalize("a\u{2014}b\u{2013}c\u{2015}d\u{2010}e"), "a-b-c-d-e");
        assert_eq!(normalize("カレ-"), normalize("カレー"));
    }

    #[test]
    fn test_internal_whitespace_is_preserved() {
        assert_eq!(normalize(" olive  oil "), "olive  oil");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "   ",
            "ＥＧＧ",
            "  Soy-Sauce ",
            "マヨネーズ",
            "合いびき肉",
            "Ｃｕｒｒｙ\u{30FC}ｒｏｕｘ",
            "\u{3000}ＭＩＳＯ\u{3000}",
            "İstanbul",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
