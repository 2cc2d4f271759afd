// src/specs/rating.rs
//! Rating attribute → [`Star`].
//!
//! Conversion mirrors how the rating pages' own script turns the `title`
//! attribute into a number: surrounding whitespace is ignored, an empty
//! string is 0, decimals/exponents and `0x`/`0o`/`0b` literals are accepted.
//! Anything else (text, `NaN`, `Infinity`, overflow) is treated like a
//! missing rating and becomes 0.

use tracing::debug;

use crate::core::sanitize::trim_text;
use crate::record::Star;

/// `None` when the anchor or the attribute is missing.
pub fn coerce(raw: Option<&str>) -> Star {
    let Some(raw) = raw else {
        return Star::ZERO;
    };

    match parse_number(raw) {
        Some(v) if v.is_finite() => Star::new(v),
        _ => {
            debug!(raw, "rating is not numeric, using 0");
            Star::ZERO
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let t = trim_text(raw);
    if t.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            // from_str_radix takes a sign; a prefixed literal never does
            if digits.starts_with(['+', '-']) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    if t.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    t.parse::<f64>().ok()
}
