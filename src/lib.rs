//! Roman Numeral Converter WASM Module
//!
//! This is the main WASM module for the roman numeral converter. It provides
//! bidirectional conversion between Latin roman numerals, including the
//! extended vinculum notation for large magnitudes, and decimal integers,
//! with strict well-formedness validation.

pub mod api;
pub mod converters;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use converters::{convert_decimal_to_roman, decimal_to_roman, roman_to_decimal, MAX_DECIMAL};
pub use models::errors::ConversionError;
pub use models::rules::VALIDATION_RULES;
pub use models::symbols::{RomanSymbol, VinculumMark, ROMAN_SYMBOLS, VINCULUM_MARKS};
pub use parse::sanitize::sanitize;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Roman numeral converter WASM module initialized");
}
