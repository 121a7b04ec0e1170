//! # Symbology Tables
//!
//! Static bar/space patterns for every supported symbology. Each pattern is a
//! string of `'1'` (bar) and `'0'` (space) modules. No logic lives here beyond
//! table lookup.
//!
//! ## Pattern Widths
//!
//! | Table | Entries | Modules each |
//! |-------|---------|--------------|
//! | Code 128 data | 103 (values 0-102) | 11 |
//! | Code 128 stop | 1 | 13 |
//! | EAN L / G / R | 10 each | 7 |
//! | EAN guards | start, center, end | 3, 5, 3 |
//! | Code 39 | 43 characters + sentinel | 12 (9 elements, 3 wide) |

/// Code 128 Start Code B.
pub const CODE128_START_B: &str = "11010010000";

/// Value of Start Code B, the seed of the mod-103 checksum.
pub const CODE128_START_B_VALUE: u32 = 104;

/// Code 128 stop pattern (includes the final termination bar).
pub const CODE128_STOP: &str = "1100011101011";

/// Code 128 data patterns indexed by symbol value.
///
/// Values 0-95 are Code Set B characters (`char - 32`); 96-102 are function
/// codes, reachable only as checksum values.
pub const CODE128_PATTERNS: [&str; 103] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110",
];

pub const EAN_START_GUARD: &str = "101";
pub const EAN_CENTER_GUARD: &str = "01010";
pub const EAN_END_GUARD: &str = "101";

/// Left-hand odd parity ("L") patterns, indexed by digit.
pub const EAN_L_PATTERNS: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

/// Left-hand even parity ("G") patterns, indexed by digit.
pub const EAN_G_PATTERNS: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];

/// Right-hand ("R") patterns, indexed by digit.
pub const EAN_R_PATTERNS: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// EAN-8 has no parity variation: its left half always uses the L set.
pub const EAN8_LEFT_PATTERNS: [&str; 10] = EAN_L_PATTERNS;

/// Parity set for one left-half digit of an EAN-13 symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd parity
    L,
    /// Even parity
    G,
}

impl Parity {
    /// Pattern for `digit` in this parity set.
    pub fn pattern(self, digit: u8) -> &'static str {
        match self {
            Parity::L => EAN_L_PATTERNS[digit as usize],
            Parity::G => EAN_G_PATTERNS[digit as usize],
        }
    }
}

use Parity::{G, L};

/// EAN-13 left-half parity templates, keyed by the leading digit.
///
/// The leading digit is never drawn; it is carried by the L/G mix of digits 1-6.
pub const EAN13_PARITY: [[Parity; 6]; 10] = [
    [L, L, L, L, L, L],
    [L, L, G, L, G, G],
    [L, L, G, G, L, G],
    [L, L, G, G, G, L],
    [L, G, L, L, G, G],
    [L, G, G, L, L, G],
    [L, G, G, G, L, L],
    [L, G, L, G, L, G],
    [L, G, L, G, G, L],
    [L, G, G, L, G, L],
];

/// Code 39 start/stop character (`*`).
pub const CODE39_SENTINEL: &str = "100101101101";

/// Code 39 pattern for a data character, or `None` outside the alphabet.
pub fn code39_pattern(ch: char) -> Option<&'static str> {
    let pattern = match ch {
        '0' => "101001101101",
        '1' => "110100101011",
        '2' => "101100101011",
        '3' => "110110010101",
        '4' => "101001101011",
        '5' => "110100110101",
        '6' => "101100110101",
        '7' => "101001011011",
        '8' => "110100101101",
        '9' => "101100101101",
        'A' => "110101001011",
        'B' => "101101001011",
        'C' => "110110100101",
        'D' => "101011001011",
        'E' => "110101100101",
        'F' => "101101100101",
        'G' => "101010011011",
        'H' => "110101001101",
        'I' => "101101001101",
        'J' => "101011001101",
        'K' => "110101010011",
        'L' => "101101010011",
        'M' => "110110101001",
        'N' => "101011010011",
        'O' => "110101101001",
        'P' => "101101101001",
        'Q' => "101010110011",
        'R' => "110101011001",
        'S' => "101101011001",
        'T' => "101011011001",
        'U' => "110010101011",
        'V' => "100110101011",
        'W' => "110011010101",
        'X' => "100101101011",
        'Y' => "110010110101",
        'Z' => "100110110101",
        '-' => "100101011011",
        '.' => "110010101101",
        ' ' => "100110101101",
        '$' => "100100100101",
        '/' => "100100101001",
        '+' => "100101001001",
        '%' => "101001001001",
        _ => return None,
    };
    Some(pattern)
}
