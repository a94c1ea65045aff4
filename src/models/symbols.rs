//! Roman symbol and vinculum mark tables
//!
//! This module provides the lookup tables for the seven roman symbols and the
//! two vinculum multiplier marks. Both tables are ordered ascending by value
//! so consumers can render a stable reference legend.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The seven roman symbols, each with a fixed base value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RomanSymbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// All roman symbols, ascending by value.
pub const ROMAN_SYMBOLS: [RomanSymbol; 7] = [
    RomanSymbol::I,
    RomanSymbol::V,
    RomanSymbol::X,
    RomanSymbol::L,
    RomanSymbol::C,
    RomanSymbol::D,
    RomanSymbol::M,
];

// Case-insensitive character lookup, built once at first use
static SYMBOL_LOOKUP: Lazy<HashMap<char, RomanSymbol>> = Lazy::new(|| {
    ROMAN_SYMBOLS.iter().map(|&s| (s.glyph(), s)).collect()
});

impl RomanSymbol {
    /// Base decimal value of the symbol
    pub const fn value(self) -> i64 {
        match self {
            RomanSymbol::I => 1,
            RomanSymbol::V => 5,
            RomanSymbol::X => 10,
            RomanSymbol::L => 50,
            RomanSymbol::C => 100,
            RomanSymbol::D => 500,
            RomanSymbol::M => 1000,
        }
    }

    /// Canonical uppercase glyph
    pub const fn glyph(self) -> char {
        match self {
            RomanSymbol::I => 'I',
            RomanSymbol::V => 'V',
            RomanSymbol::X => 'X',
            RomanSymbol::L => 'L',
            RomanSymbol::C => 'C',
            RomanSymbol::D => 'D',
            RomanSymbol::M => 'M',
        }
    }

    /// Look up a symbol from a character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        SYMBOL_LOOKUP.get(&c.to_ascii_uppercase()).copied()
    }
}

impl fmt::Display for RomanSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Vinculum marks for extended notation, written after the symbol they scale.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VinculumMark {
    /// `·` scales the preceding symbol by 1,000
    Thousand,
    /// `:` scales the preceding symbol by 1,000,000
    Million,
}

/// All vinculum marks, ascending by multiplier.
pub const VINCULUM_MARKS: [VinculumMark; 2] = [VinculumMark::Thousand, VinculumMark::Million];

impl VinculumMark {
    pub const fn multiplier(self) -> i64 {
        match self {
            VinculumMark::Thousand => 1_000,
            VinculumMark::Million => 1_000_000,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            VinculumMark::Thousand => '·',
            VinculumMark::Million => ':',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '·' => Some(VinculumMark::Thousand),
            ':' => Some(VinculumMark::Million),
            _ => None,
        }
    }
}

impl fmt::Display for VinculumMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Check whether a character belongs to the accepted alphabet
/// (roman symbols in either case, or a vinculum mark).
pub fn is_accepted_char(c: char) -> bool {
    RomanSymbol::from_char(c).is_some() || VinculumMark::from_char(c).is_some()
}
