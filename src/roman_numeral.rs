// 章見出し用のローマ数字
// "I" だけは全角ラテン文字 "Ｉ" になる (ローマ数字の "Ⅰ" ではない)
static ROMAN_NUMERALS: [(&str, &str); 12] = [
    ("I", "Ｉ"),
    ("II", "Ⅱ"),
    ("III", "Ⅲ"),
    ("IV", "Ⅳ"),
    ("V", "Ⅴ"),
    ("VI", "Ⅵ"),
    ("VII", "Ⅶ"),
    ("VIII", "Ⅷ"),
    ("IX", "Ⅸ"),
    ("X", "Ⅹ"),
    ("XI", "Ⅺ"),
    ("XII", "Ⅻ"),
];

/// Maps `"I"`..`"XII"` to the glyph used in chapter headings.
/// Anything else is returned unchanged.
pub fn normalize(num: &str) -> &str {
    ROMAN_NUMERALS
        .iter()
        .find(|(ascii, _)| *ascii == num)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(num)
}
