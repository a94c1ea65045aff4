//! Error types for roman numeral conversion
//!
//! Every failure is surfaced as a value, never a panic: the caller is an
//! interactive form that has to display exactly one message per attempt.
//! Variants are ordered by validator priority, then by the extra cases the
//! decimal direction adds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Single error surfaced by a conversion attempt, first-match-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConversionError {
    /// Input was null, blank, or whitespace only
    #[error("Please enter a number")]
    EmptyInput,

    /// A symbol appeared more than three times in a row
    #[error("A symbol cannot appear more than 3 times consecutively")]
    TooManyRepeats,

    /// Input does not match the roman numeral grammar
    #[error("Incorrect roman numeral format")]
    MalformedFormat,

    /// V, L or D appeared as the smaller member of a subtractive pair
    #[error("V, L and D cannot be subtracted")]
    NonSubtractable,

    /// I subtracted from anything other than V or X
    #[error("I can only be subtracted from V or X")]
    BadSubtrahendI,

    /// X subtracted from anything other than L or C
    #[error("X can only be subtracted from L or C")]
    BadSubtrahendX,

    /// C subtracted from anything other than D or M
    #[error("C can only be subtracted from D or M")]
    BadSubtrahendC,

    /// Decimal input could not be read as a whole number
    #[error("The number must be an integer")]
    NotAnInteger,

    /// Decimal input was zero or negative
    #[error("The number must be positive")]
    NotPositive,

    /// Decimal input exceeds the largest representable numeral
    #[error("The number must not exceed 3,999,999,999")]
    TooLarge,
}
