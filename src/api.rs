//! JavaScript-facing WASM API
//!
//! Thin shims over the core converter for the surrounding form. Inputs
//! arrive as raw `JsValue`s so a caller passing null, a number or an object
//! degrades to an error result instead of a type panic. Every conversion
//! returns a `{ value, error? }` object: `error` absent and `value` populated
//! on success, `error` present and `value` zero or empty on failure.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::converters::{convert_decimal_to_roman, roman_to_decimal};
use crate::models::errors::ConversionError;
use crate::models::rules::VALIDATION_RULES;
use crate::models::symbols::{ROMAN_SYMBOLS, VINCULUM_MARKS};
use crate::parse::sanitize::sanitize;

/// Wire shape of a conversion result.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConversionOutcome<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Default> ConversionOutcome<T> {
    pub fn from_result(result: Result<T, ConversionError>) -> Self {
        match result {
            Ok(value) => Self { value, error: None },
            Err(e) => Self {
                value: T::default(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// One row of the reference legend
#[derive(Serialize, Clone, Debug)]
struct LegendEntry {
    glyph: char,
    value: i64,
}

fn to_js<T: Serialize>(outcome: &T) -> JsValue {
    serde_wasm_bindgen::to_value(outcome).unwrap_or(JsValue::NULL)
}

/// Convert a roman numeral to its decimal value.
#[wasm_bindgen(js_name = convertRomanToDecimal)]
pub fn convert_roman_to_decimal_js(input: JsValue) -> JsValue {
    let result = if input.is_null() || input.is_undefined() {
        Err(ConversionError::EmptyInput)
    } else if let Some(roman) = input.as_string() {
        log::debug!("converting roman input {roman:?}");
        roman_to_decimal(&roman)
    } else {
        // Numbers, arrays, objects: not a roman numeral
        Err(ConversionError::MalformedFormat)
    };
    to_js(&ConversionOutcome::from_result(result))
}

/// Convert a decimal integer (given as a string or number) to roman notation.
#[wasm_bindgen(js_name = convertDecimalToRoman)]
pub fn convert_decimal_to_roman_js(input: JsValue) -> JsValue {
    let result = if input.is_null() || input.is_undefined() {
        Err(ConversionError::EmptyInput)
    } else if let Some(decimal) = input.as_string() {
        log::debug!("converting decimal input {decimal:?}");
        convert_decimal_to_roman(&decimal)
    } else if let Some(n) = input.as_f64() {
        if n.fract() != 0.0 {
            Err(ConversionError::NotAnInteger)
        } else {
            crate::converters::decimal_to_roman(n as i64)
        }
    } else {
        Err(ConversionError::NotAnInteger)
    };
    to_js(&ConversionOutcome::from_result(result))
}

/// Strip everything outside the roman alphabet from free-typed input.
/// Never errors; non-string input yields the empty string.
#[wasm_bindgen(js_name = sanitizeInput)]
pub fn sanitize_input_js(input: JsValue) -> String {
    match input.as_string() {
        Some(raw) => sanitize(&raw),
        None => String::new(),
    }
}

/// Advisory maximum length for the input field.
#[wasm_bindgen(js_name = maxInputLength)]
pub fn max_input_length() -> usize {
    VALIDATION_RULES.max_length
}

/// Symbol table as `[{ glyph, value }]`, ascending by value, for rendering a
/// reference legend.
#[wasm_bindgen(js_name = symbolLegend)]
pub fn symbol_legend() -> JsValue {
    let entries: Vec<LegendEntry> = ROMAN_SYMBOLS
        .iter()
        .map(|s| LegendEntry {
            glyph: s.glyph(),
            value: s.value(),
        })
        .collect();
    to_js(&entries)
}

/// Multiplier mark table as `[{ glyph, value }]`, ascending by multiplier.
#[wasm_bindgen(js_name = vinculumLegend)]
pub fn vinculum_legend() -> JsValue {
    let entries: Vec<LegendEntry> = VINCULUM_MARKS
        .iter()
        .map(|m| LegendEntry {
            glyph: m.glyph(),
            value: m.multiplier(),
        })
        .collect();
    to_js(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_has_no_error() {
        let outcome = ConversionOutcome::from_result(Ok(14i64));
        assert_eq!(outcome.value, 14);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn outcome_failure_has_default_value() {
        let outcome = ConversionOutcome::<i64>::from_result(Err(ConversionError::EmptyInput));
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.error.as_deref(), Some("Please enter a number"));

        let outcome = ConversionOutcome::<String>::from_result(Err(ConversionError::TooLarge));
        assert_eq!(outcome.value, "");
    }
}
