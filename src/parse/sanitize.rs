//! Keystroke sanitizer
//!
//! Best-effort filter invoked on every keystroke by the surrounding form.
//! Strips everything outside the accepted alphabet and never reports an
//! error. Case is preserved, not folded.

use crate::models::symbols::is_accepted_char;

/// Return a copy of `raw` containing only roman symbols (either case) and
/// vinculum marks. All other characters are removed, not replaced.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_accepted_char(c)).collect()
}
