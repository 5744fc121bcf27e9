//! Currency parsing and formatting.
//!
//! Prices are stored as whole cents. Decimal dollar text is split on the point
//! and scaled digit-wise, so `"5.1"` means 510 cents and no floating point is
//! involved. Digits past the second fractional place are truncated.

use crate::errors::{Error, Result};

/// Parses a dollar amount such as `"19.99"` or `"$12.99"` into cents.
///
/// A leading `$` and surrounding whitespace are ignored. Integer amounts
/// (`"5"`) and a single fractional digit (`"5.1"`) are accepted.
///
/// # Errors
/// Returns [`Error::InvalidPrice`] for empty, negative or non-numeric input.
pub fn parse_dollars(input: &str) -> Result<i64> {
    let invalid = || Error::InvalidPrice {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    let mut cents = 0_i64;
    let mut digits = fraction.bytes();
    for scale in [10, 1] {
        if let Some(d) = digits.next() {
            cents += i64::from(d - b'0') * scale;
        }
    }

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(invalid)
}

/// Formats cents as `$D.CC`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
