//! Numeral tables for single-glyph input.
//!
//! A glyph such as `٣`, `²`, `½` or `Ⅻ` denotes a number on its own. The
//! [`NumeralTable`] trait is the boundary to whatever character database the
//! caller trusts; [`UnicodeNumerals`] is the built-in one.

/// Digit and numeric values of single characters.
pub trait NumeralTable {
    /// Digit value 0-9, if the character is a digit in any script.
    fn digit(&self, c: char) -> Option<u32>;

    /// Numeric value of any numeral character, digits included.
    fn numeric(&self, c: char) -> Option<f64>;
}

/// Built-in numeral table.
///
/// Covers every decimal-digit run in Unicode, superscript and subscript
/// digits, circled numbers, vulgar fractions, Roman numerals and the common
/// CJK numerals.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnicodeNumerals;

impl NumeralTable for UnicodeNumerals {
    fn digit(&self, c: char) -> Option<u32> {
        let cp = u32::from(c);
        if let Some(d) = decimal_digit(cp) {
            return Some(d);
        }
        match cp {
            0x00B2 => Some(2),
            0x00B3 => Some(3),
            0x00B9 => Some(1),
            0x2070 => Some(0),
            0x2074..=0x2079 => Some(cp - 0x2070),
            0x2080..=0x2089 => Some(cp - 0x2080),
            0x2460..=0x2468 => Some(cp - 0x2460 + 1),
            0x24EA => Some(0),
            _ => None,
        }
    }

    fn numeric(&self, c: char) -> Option<f64> {
        if let Some(d) = self.digit(c) {
            return Some(f64::from(d));
        }
        let cp = u32::from(c);
        match cp {
            0x2460..=0x2473 => Some(f64::from(cp - 0x2460 + 1)),
            0x2160..=0x216B => Some(f64::from(cp - 0x2160 + 1)),
            0x2170..=0x217B => Some(f64::from(cp - 0x2170 + 1)),
            0x216C | 0x217C => Some(50.0),
            0x216D | 0x217D => Some(100.0),
            0x216E | 0x217E => Some(500.0),
            0x216F | 0x217F | 0x2180 => Some(1000.0),
            0x2181 => Some(5000.0),
            0x2182 => Some(10000.0),
            _ => NAMED_VALUES
                .binary_search_by_key(&c, |&(glyph, _)| glyph)
                .ok()
                .map(|i| NAMED_VALUES[i].1),
        }
    }
}

/// First code point (the zero) of every Unicode decimal-digit run, sorted.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn decimal_digit(cp: u32) -> Option<u32> {
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_ZEROS[run.checked_sub(1)?];
    let d = cp - zero;
    (d < 10).then_some(d)
}

/// Non-digit numerals looked up by exact character, sorted by character.
const NAMED_VALUES: [(char, f64); 34] = [
    ('\u{00BC}', 0.25),
    ('\u{00BD}', 0.5),
    ('\u{00BE}', 0.75),
    ('\u{2150}', 1.0 / 7.0),
    ('\u{2151}', 1.0 / 9.0),
    ('\u{2152}', 0.1),
    ('\u{2153}', 1.0 / 3.0),
    ('\u{2154}', 2.0 / 3.0),
    ('\u{2155}', 0.2),
    ('\u{2156}', 0.4),
    ('\u{2157}', 0.6),
    ('\u{2158}', 0.8),
    ('\u{2159}', 1.0 / 6.0),
    ('\u{215A}', 5.0 / 6.0),
    ('\u{215B}', 0.125),
    ('\u{215C}', 0.375),
    ('\u{215D}', 0.625),
    ('\u{215E}', 0.875),
    ('\u{2189}', 0.0),
    ('\u{3007}', 0.0),
    ('\u{4E00}', 1.0),
    ('\u{4E03}', 7.0),
    ('\u{4E07}', 10_000.0),
    ('\u{4E09}', 3.0),
    ('\u{4E5D}', 9.0),
    ('\u{4E8C}', 2.0),
    ('\u{4E94}', 5.0),
    ('\u{5104}', 100_000_000.0),
    ('\u{516B}', 8.0),
    ('\u{516D}', 6.0),
    ('\u{5341}', 10.0),
    ('\u{5343}', 1000.0),
    ('\u{56DB}', 4.0),
    ('\u{767E}', 100.0),
];
