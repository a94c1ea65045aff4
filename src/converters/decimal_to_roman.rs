//! Decimal to roman conversion
//!
//! Values in the standard range render plainly with the greedy
//! largest-symbol-first table. Above it, multiplier tiers take over largest
//! first (×1,000,000, then ×1,000), each engaging only when the value no
//! longer fits below it, and emitting the tier's vinculum mark after every
//! symbol. Adjacent tiers can end and start on the same symbol, which the
//! mark-tolerant repeat rule would reject on read-back; when that happens one
//! unit of the upper tier is borrowed into the lower segment and the numeral
//! is re-rendered, so every output reads back to its input.

use crate::models::errors::ConversionError;
use crate::models::symbols::VinculumMark;
use crate::parse::validator::validate;

/// Largest value representable with three repeats per symbol on every tier.
pub const MAX_DECIMAL: i64 = 3_999_999_999;

/// Largest portion a single tier can render
const TIER_CAP: i64 = 3_999;

/// Largest value expressible without the ×1,000 tier
const PLAIN_MAX: i64 = TIER_CAP;

/// Largest value expressible without the ×1,000,000 tier
const THOUSAND_MAX: i64 = TIER_CAP * 1_000 + 999;

/// Most units a tier will lend across a seam
const MAX_BORROW: i64 = 3;

/// Greedy emission table, largest value first.
const GREEDY_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a positive integer to roman notation, using vinculum marks for
/// magnitudes above the standard range.
pub fn decimal_to_roman(n: i64) -> Result<String, ConversionError> {
    if n <= 0 {
        return Err(ConversionError::NotPositive);
    }
    if n > MAX_DECIMAL {
        return Err(ConversionError::TooLarge);
    }

    // The unborrowed rendering is almost always valid. A borrow shifts a
    // tier seam when the upper tier's trailing symbols and the lower
    // segment's leading symbols would fuse into a run past the repeat limit
    // (13,004 would otherwise come out as X·I·I·I·IV).
    let mut first = String::new();
    for million_borrow in 0..=MAX_BORROW {
        for thousand_borrow in 0..=MAX_BORROW {
            let Some(candidate) = render_tiers(n, million_borrow, thousand_borrow) else {
                continue;
            };
            if validate(&candidate).is_ok() {
                return Ok(candidate);
            }
            if first.is_empty() {
                first = candidate;
            }
        }
    }
    Ok(first)
}

/// Parse free-form decimal input and convert it.
///
/// Blank input is reported as empty, anything that does not read as a whole
/// number as a non-integer; range errors come from [`decimal_to_roman`].
pub fn convert_decimal_to_roman(raw: &str) -> Result<String, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    let n: i64 = trimmed
        .parse()
        .map_err(|_| ConversionError::NotAnInteger)?;
    decimal_to_roman(n)
}

/// Render one candidate numeral. A tier engages only when the remaining
/// value exceeds what the tiers below it can express; a borrow moves that
/// many units of a tier down into the next segment. `None` means the borrow
/// does not apply to this value.
fn render_tiers(n: i64, million_borrow: i64, thousand_borrow: i64) -> Option<String> {
    let mut remaining = n;
    let mut out = String::new();

    if remaining > THOUSAND_MAX {
        let portion = remaining / VinculumMark::Million.multiplier() - million_borrow;
        if portion < 1 {
            return None;
        }
        render_greedy(portion, Some(VinculumMark::Million), &mut out);
        remaining -= portion * VinculumMark::Million.multiplier();
    } else if million_borrow > 0 {
        return None;
    }

    if remaining > PLAIN_MAX {
        // After a borrow the remainder stays under THOUSAND_MAX, so the
        // portion never exceeds the tier cap
        let portion = remaining / VinculumMark::Thousand.multiplier() - thousand_borrow;
        if portion < 1 {
            return None;
        }
        render_greedy(portion, Some(VinculumMark::Thousand), &mut out);
        remaining -= portion * VinculumMark::Thousand.multiplier();
    } else if thousand_borrow > 0 {
        return None;
    }

    if remaining > 0 {
        render_greedy(remaining, None, &mut out);
    }
    Some(out)
}

/// Emit `n` (1..=3999) with the greedy table, appending `mark` after every
/// emitted symbol.
fn render_greedy(mut n: i64, mark: Option<VinculumMark>, out: &mut String) {
    for &(value, symbols) in GREEDY_TABLE.iter() {
        while n >= value {
            for c in symbols.chars() {
                out.push(c);
                if let Some(m) = mark {
                    out.push(m.glyph());
                }
            }
            n -= value;
        }
    }
}
