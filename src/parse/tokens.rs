//! Token decomposition for validated roman strings
//!
//! Splits a roman string into (symbol, optional mark, resolved value)
//! triples. A mark always binds to the symbol immediately before it. The
//! decomposer assumes validation already ran; characters it cannot resolve
//! contribute nothing rather than failing.

use serde::{Deserialize, Serialize};

use crate::models::symbols::{RomanSymbol, VinculumMark};

/// One resolved symbol of a roman numeral.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedToken {
    pub symbol: RomanSymbol,
    pub mark: Option<VinculumMark>,
    /// Base value scaled by the mark's multiplier (or 1)
    pub value: i64,
}

/// Decompose a validated roman string into tokens in left-to-right order.
pub fn decompose(roman: &str) -> Vec<ParsedToken> {
    let chars: Vec<char> = roman.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match RomanSymbol::from_char(chars[i]) {
            Some(symbol) => {
                let mark = chars.get(i + 1).copied().and_then(VinculumMark::from_char);
                let value = symbol.value() * mark.map_or(1, VinculumMark::multiplier);
                tokens.push(ParsedToken { symbol, mark, value });
                i += if mark.is_some() { 2 } else { 1 };
            }
            None => i += 1,
        }
    }
    tokens
}
