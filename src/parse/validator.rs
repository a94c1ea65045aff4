//! Roman numeral validator
//!
//! Four rules evaluated in a fixed priority order, first failure wins:
//! not-empty, repeat limit, format grammar, subtraction constraints. The
//! checks are explicit linear scans so adversarial input cannot trigger
//! pathological backtracking. Validation is a pure predicate: no side
//! effects, total over any string.

use crate::models::errors::ConversionError;
use crate::models::rules::VALIDATION_RULES;
use crate::models::symbols::{RomanSymbol, VinculumMark};

/// Validate a candidate roman string against all four rules.
pub fn validate(raw: &str) -> Result<(), ConversionError> {
    check_not_empty(raw)?;
    check_repeats(raw)?;
    check_format(raw)?;
    check_subtractions(raw)
}

fn check_not_empty(raw: &str) -> Result<(), ConversionError> {
    if raw.trim().is_empty() {
        Err(ConversionError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Reject more than `max_repeats` consecutive occurrences of one symbol.
///
/// A single vinculum mark between repeats does not break the run (`M·M·M·M·`
/// is still four M's), but a second consecutive mark does, and so does any
/// other character. This scan runs before the format check, so it has to
/// tolerate arbitrary garbage in the string.
fn check_repeats(raw: &str) -> Result<(), ConversionError> {
    let mut run: Option<RomanSymbol> = None;
    let mut count = 0usize;
    let mut marks_since_symbol = 0usize;

    for c in raw.chars() {
        if VinculumMark::from_char(c).is_some() {
            marks_since_symbol += 1;
            if marks_since_symbol > 1 {
                run = None;
                count = 0;
            }
            continue;
        }
        match RomanSymbol::from_char(c) {
            Some(symbol) => {
                if run == Some(symbol) {
                    count += 1;
                } else {
                    run = Some(symbol);
                    count = 1;
                }
                marks_since_symbol = 0;
                if count > VALIDATION_RULES.max_repeats {
                    return Err(ConversionError::TooManyRepeats);
                }
            }
            None => {
                run = None;
                count = 0;
                marks_since_symbol = 0;
            }
        }
    }
    Ok(())
}

/// Enforce the grammar `symbol mark? (symbol mark?)*`: no foreign characters,
/// no leading mark, no two marks in a row.
fn check_format(raw: &str) -> Result<(), ConversionError> {
    #[derive(PartialEq)]
    enum State {
        Start,
        AfterSymbol,
        AfterMark,
    }

    let mut state = State::Start;
    for c in raw.chars() {
        if RomanSymbol::from_char(c).is_some() {
            state = State::AfterSymbol;
        } else if VinculumMark::from_char(c).is_some() {
            if state != State::AfterSymbol {
                return Err(ConversionError::MalformedFormat);
            }
            state = State::AfterMark;
        } else {
            return Err(ConversionError::MalformedFormat);
        }
    }

    if state == State::Start {
        // Unreachable after the not-empty rule, kept for totality
        return Err(ConversionError::MalformedFormat);
    }
    Ok(())
}

/// Enforce the classical subtraction constraints on adjacent symbol pairs.
///
/// Pairs are compared on base values; a vinculum mark on the second symbol is
/// skipped so it does not change which pair is compared. The first violation
/// in a left-to-right scan is returned.
fn check_subtractions(raw: &str) -> Result<(), ConversionError> {
    let chars: Vec<char> = raw.chars().collect();

    for pair in chars.windows(2) {
        if VinculumMark::from_char(pair[1]).is_some() {
            continue;
        }
        let (Some(current), Some(next)) = (
            RomanSymbol::from_char(pair[0]),
            RomanSymbol::from_char(pair[1]),
        ) else {
            continue;
        };

        if current.value() < next.value() {
            match current {
                RomanSymbol::V | RomanSymbol::L | RomanSymbol::D => {
                    return Err(ConversionError::NonSubtractable);
                }
                RomanSymbol::I if !matches!(next, RomanSymbol::V | RomanSymbol::X) => {
                    return Err(ConversionError::BadSubtrahendI);
                }
                RomanSymbol::X if !matches!(next, RomanSymbol::L | RomanSymbol::C) => {
                    return Err(ConversionError::BadSubtrahendX);
                }
                RomanSymbol::C if !matches!(next, RomanSymbol::D | RomanSymbol::M) => {
                    return Err(ConversionError::BadSubtrahendC);
                }
                _ => {}
            }
        }
    }
    Ok(())
}
