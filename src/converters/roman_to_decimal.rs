//! Roman to decimal conversion
//!
//! Classical add/subtract accumulation generalized to resolved values: the
//! tokens are walked right-to-left, and a value strictly smaller than the one
//! to its right is subtracted instead of added. Working on resolved values
//! means the rule also covers subtractive pairs inside a vinculum tier
//! (`I·V·` is 5000 − 1000).

use crate::models::errors::ConversionError;
use crate::parse::tokens::decompose;
use crate::parse::validator::validate;

/// Convert a roman numeral string to its decimal value.
///
/// The input is validated first; any rule violation is returned as the single
/// error for the call. The accumulator itself never clamps — the validator is
/// what keeps invalid sequences out.
pub fn roman_to_decimal(raw: &str) -> Result<i64, ConversionError> {
    validate(raw)?;

    let mut total = 0i64;
    let mut prev = 0i64;
    for token in decompose(raw).iter().rev() {
        if token.value < prev {
            total -= token.value;
        } else {
            total += token.value;
        }
        prev = token.value;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symbols() {
        for (roman, expected) in [
            ("I", 1),
            ("V", 5),
            ("X", 10),
            ("L", 50),
            ("C", 100),
            ("D", 500),
            ("M", 1000),
        ] {
            assert_eq!(roman_to_decimal(roman), Ok(expected));
        }
    }

    #[test]
    fn additive_and_subtractive_numerals() {
        assert_eq!(roman_to_decimal("XIV"), Ok(14));
        assert_eq!(roman_to_decimal("IV"), Ok(4));
        assert_eq!(roman_to_decimal("IX"), Ok(9));
        assert_eq!(roman_to_decimal("MCMXCIV"), Ok(1994));
        assert_eq!(roman_to_decimal("MMMCMXCIX"), Ok(3999));
        assert_eq!(roman_to_decimal("MDCLXVI"), Ok(1666));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(roman_to_decimal("xiv"), Ok(14));
        assert_eq!(roman_to_decimal("mCmXcIv"), Ok(1994));
    }

    #[test]
    fn vinculum_tiers() {
        assert_eq!(roman_to_decimal("M·"), Ok(1_000_000));
        assert_eq!(roman_to_decimal("M:"), Ok(1_000_000_000));
        assert_eq!(roman_to_decimal("I·"), Ok(1_000));
        assert_eq!(roman_to_decimal("M:M:M:"), Ok(3_000_000_000));
    }

    #[test]
    fn subtraction_applies_to_resolved_values() {
        assert_eq!(roman_to_decimal("I·V·"), Ok(4_000));
        assert_eq!(roman_to_decimal("I:X:"), Ok(9_000_000));
        assert_eq!(roman_to_decimal("C·M·"), Ok(900_000));
    }

    #[test]
    fn mixed_standard_and_vinculum() {
        assert_eq!(roman_to_decimal("X·L·V·MMM"), Ok(48_000));
        assert_eq!(roman_to_decimal("M·DCCCLXXXVIII"), Ok(1_000_888));
        assert_eq!(roman_to_decimal("V:MMMCMXCIX"), Ok(5_003_999));
        assert_eq!(roman_to_decimal("M·C·M·X·C·I·X·CMXCIX"), Ok(1_999_999));
        assert_eq!(roman_to_decimal("M·M·M·C·M·X·C·I·X·"), Ok(3_999_000));
    }

    #[test]
    fn validation_errors_pass_through() {
        assert_eq!(roman_to_decimal(""), Err(ConversionError::EmptyInput));
        assert_eq!(roman_to_decimal("IIII"), Err(ConversionError::TooManyRepeats));
        assert_eq!(roman_to_decimal("XIV!"), Err(ConversionError::MalformedFormat));
        assert_eq!(roman_to_decimal("VL"), Err(ConversionError::NonSubtractable));
        assert_eq!(roman_to_decimal("IL"), Err(ConversionError::BadSubtrahendI));
    }
}
