//! WASM API test
//!
//! Exercises the JavaScript-facing surface under the wasm-bindgen test
//! runner. Only built for the wasm32 target; native `cargo test` covers the
//! core pipeline directly.

#![cfg(target_arch = "wasm32")]

use roman_wasm::api::{
    convert_decimal_to_roman_js, convert_roman_to_decimal_js, max_input_length, sanitize_input_js,
    symbol_legend, vinculum_legend,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(result: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(result, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn converts_a_roman_string() {
    let result = convert_roman_to_decimal_js(JsValue::from_str("XIV"));
    assert_eq!(field(&result, "value").as_f64(), Some(14.0));
    assert!(field(&result, "error").is_undefined());
}

#[wasm_bindgen_test]
fn null_input_reports_empty() {
    let result = convert_roman_to_decimal_js(JsValue::NULL);
    assert_eq!(
        field(&result, "error").as_string().as_deref(),
        Some("Please enter a number")
    );
    assert_eq!(field(&result, "value").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn non_string_input_reports_malformed() {
    let result = convert_roman_to_decimal_js(JsValue::from_f64(123.0));
    assert_eq!(
        field(&result, "error").as_string().as_deref(),
        Some("Incorrect roman numeral format")
    );
}

#[wasm_bindgen_test]
fn decimal_direction_accepts_numbers_and_strings() {
    let result = convert_decimal_to_roman_js(JsValue::from_str("14"));
    assert_eq!(field(&result, "value").as_string().as_deref(), Some("XIV"));

    let result = convert_decimal_to_roman_js(JsValue::from_f64(14.0));
    assert_eq!(field(&result, "value").as_string().as_deref(), Some("XIV"));

    let result = convert_decimal_to_roman_js(JsValue::from_f64(3.5));
    assert_eq!(
        field(&result, "error").as_string().as_deref(),
        Some("The number must be an integer")
    );
}

#[wasm_bindgen_test]
fn sanitizer_filters_keystrokes() {
    assert_eq!(sanitize_input_js(JsValue::from_str("X1I2V3")), "XIV");
    assert_eq!(sanitize_input_js(JsValue::NULL), "");
    assert_eq!(sanitize_input_js(JsValue::from_f64(42.0)), "");
}

#[wasm_bindgen_test]
fn legend_and_limits_are_exposed() {
    assert_eq!(max_input_length(), 25);
    let legend = symbol_legend();
    let first = js_sys::Reflect::get_u32(&legend, 0).unwrap();
    assert_eq!(field(&first, "glyph").as_string().as_deref(), Some("I"));
    assert_eq!(field(&first, "value").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn vinculum_legend_lists_marks_ascending() {
    let legend = vinculum_legend();
    assert_eq!(js_sys::Array::from(&legend).length(), 2);

    let thousand = js_sys::Reflect::get_u32(&legend, 0).unwrap();
    assert_eq!(field(&thousand, "glyph").as_string().as_deref(), Some("·"));
    assert_eq!(field(&thousand, "value").as_f64(), Some(1_000.0));

    let million = js_sys::Reflect::get_u32(&legend, 1).unwrap();
    assert_eq!(field(&million, "glyph").as_string().as_deref(), Some(":"));
    assert_eq!(field(&million, "value").as_f64(), Some(1_000_000.0));
}
