//! Data model for the roman numeral converter
//!
//! Immutable constant tables (symbols, vinculum marks, validation rules) and
//! the error taxonomy shared by the validator and both converters.

pub mod errors;
pub mod rules;
pub mod symbols;

pub use errors::ConversionError;
pub use rules::{ValidationRules, VALIDATION_RULES};
pub use symbols::{RomanSymbol, VinculumMark, ROMAN_SYMBOLS, VINCULUM_MARKS};
