//! Input hygiene and decomposition
//!
//! Everything that runs before arithmetic: the keystroke sanitizer, the
//! four-rule validator and the token decomposer.

pub mod sanitize;
pub mod tokens;
pub mod validator;

pub use sanitize::sanitize;
pub use tokens::{decompose, ParsedToken};
pub use validator::validate;
