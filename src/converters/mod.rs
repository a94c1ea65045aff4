//! Conversion between roman numerals and decimal integers
//!
//! `roman_to_decimal` runs the full pipeline (validate, decompose,
//! accumulate); `decimal_to_roman` renders through the multiplier tiers.

pub mod decimal_to_roman;
pub mod roman_to_decimal;

pub use decimal_to_roman::{convert_decimal_to_roman, decimal_to_roman, MAX_DECIMAL};
pub use roman_to_decimal::roman_to_decimal;
