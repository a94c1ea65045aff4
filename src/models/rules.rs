//! Validation rule configuration
//!
//! Defined once at process start and read-only thereafter. `max_length` is
//! advisory for the surrounding form's input field; the validator itself does
//! not reject on length.

/// Constant configuration consulted by the validator and the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Advisory cap for the input field
    pub max_length: usize,
    /// Maximum consecutive occurrences of the same symbol
    pub max_repeats: usize,
}

pub const VALIDATION_RULES: ValidationRules = ValidationRules {
    max_length: 25,
    max_repeats: 3,
};
