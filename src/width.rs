//! Per-character display width classification
//!
//! Characters are either halfwidth (one terminal cell) or fullwidth (two
//! cells). The default table is a fixed set of ranges covering Japanese
//! text: kana, kanji and the fullwidth forms of digits and Latin letters.

use unicode_width::UnicodeWidthChar;

/// Which width table to measure labels with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthTable {
    /// Fixed kana/kanji/fullwidth-form ranges
    #[default]
    Japanese,
    /// Unicode East Asian Width data, clamped to one or two cells
    Unicode,
}

impl WidthTable {
    /// Width of `c` in terminal cells, always 1 or 2
    pub fn char_width(self, c: char) -> usize {
        match self {
            WidthTable::Japanese => char_width(c),
            WidthTable::Unicode => UnicodeWidthChar::width(c).unwrap_or(1).clamp(1, 2),
        }
    }
}

/// Width of `c` in terminal cells under the fixed Japanese table
pub fn char_width(c: char) -> usize {
    if is_fullwidth(c) {
        2
    } else {
        1
    }
}

/// Check if a character occupies two terminal cells
pub fn is_fullwidth(c: char) -> bool {
    is_hiragana(c)
        || is_fullwidth_katakana(c)
        || is_kanji(c)
        || is_fullwidth_digit(c)
        || is_fullwidth_upper_latin(c)
        || is_fullwidth_lower_latin(c)
}

/// ぁ through ゟ, plus the prolonged sound mark and the double hyphen
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}' | '\u{30FC}' | '\u{30A0}')
}

/// Katakana, the phonetic extensions, and the voiced sound marks
pub fn is_fullwidth_katakana(c: char) -> bool {
    matches!(
        c,
        '\u{30A1}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{3099}'..='\u{309C}'
    )
}

/// CJK unified ideographs, compatibility ideographs, and extension A
pub fn is_kanji(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FCF}' | '\u{F900}'..='\u{FAFF}' | '\u{3400}'..='\u{4DBF}'
    )
}

/// ０ through ９
pub fn is_fullwidth_digit(c: char) -> bool {
    matches!(c, '\u{FF10}'..='\u{FF19}')
}

/// Ａ through Ｚ
pub fn is_fullwidth_upper_latin(c: char) -> bool {
    matches!(c, '\u{FF21}'..='\u{FF3A}')
}

/// ａ through ｚ
pub fn is_fullwidth_lower_latin(c: char) -> bool {
    matches!(c, '\u{FF41}'..='\u{FF5A}')
}
