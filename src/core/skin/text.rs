//! core/skin/text.rs
//! Sprite-encoded text: the fixed character -> glyph-name table, plus digit
//! strips for the time display.
//!
//! Classic skins ship a bitmap font of fixed 5px-wide glyphs. Arbitrary text
//! must never crash rendering, so anything the table does not cover becomes
//! the space glyph.

/// Every text glyph is this wide, so a string is `5 * chars` pixels.
pub const CHAR_WIDTH: u32 = 5;

/// Glyph name for one character. Letters are case-folded (the font has a
/// single case); unmapped characters fall back to "space".
pub fn glyph_name(c: char) -> &'static str {
    match c {
        'a' | 'A' => "a",
        'b' | 'B' => "b",
        'c' | 'C' => "c",
        'd' | 'D' => "d",
        'e' | 'E' => "e",
        'f' | 'F' => "f",
        'g' | 'G' => "g",
        'h' | 'H' => "h",
        'i' | 'I' => "i",
        'j' | 'J' => "j",
        'k' | 'K' => "k",
        'l' | 'L' => "l",
        'm' | 'M' => "m",
        'n' | 'N' => "n",
        'o' | 'O' => "o",
        'p' | 'P' => "p",
        'q' | 'Q' => "q",
        'r' | 'R' => "r",
        's' | 'S' => "s",
        't' | 'T' => "t",
        'u' | 'U' => "u",
        'v' | 'V' => "v",
        'w' | 'W' => "w",
        'x' | 'X' => "x",
        'y' | 'Y' => "y",
        'z' | 'Z' => "z",
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        '"' => "quote",
        '@' => "at",
        ' ' => "space",
        '.' => "dot",
        ':' => "colon",
        '(' => "brace-open",
        ')' => "brace-close",
        '-' => "minus",
        '\'' => "single-quote",
        '!' => "exclamation-mark",
        '_' => "underscore",
        '+' => "plus",
        '\\' => "backslash",
        '/' => "slash",
        '[' => "square-bracket-open",
        ']' => "square-bracket-close",
        '^' => "caret",
        '&' => "ampersand",
        '%' => "percent",
        ',' => "comma",
        '=' => "equal-sign",
        '$' => "dollar",
        '#' => "hash",
        'å' | 'Å' => "a-with-ring-above",
        'ö' | 'Ö' => "o-with-diaresis",
        'ä' | 'Ä' => "a-with-diaresis",
        '?' => "question-mark",
        '*' => "asterisk",
        _ => "space",
    }
}

/// Glyph sequence for a whole string.
pub fn glyph_names(text: &str) -> Vec<&'static str> {
    text.chars().map(glyph_name).collect()
}

/// Rendered width of a string, in skin pixels.
pub fn text_width(text: &str) -> u32 {
    CHAR_WIDTH * text.chars().count() as u32
}

/// Full sprite name for a text glyph.
pub fn text_sprite(glyph: &str) -> String {
    format!("text-{glyph}")
}

/// Digit glyphs for a non-negative integer, zero-padded to `padding`
/// characters. Values wider than the padding keep all their digits — padding
/// never truncates.
pub fn digit_glyphs(value: u64, padding: usize) -> Vec<&'static str> {
    format!("{value:0padding$}").chars().map(glyph_name).collect()
}

/// Full sprite name for a digit-strip glyph (the large time-display font).
pub fn digit_sprite(glyph: &str) -> String {
    format!("numbers-digit-{glyph}")
}
