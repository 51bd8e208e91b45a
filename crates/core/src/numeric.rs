//! Lenient numeric conversion.
//!
//! Raw participant figures arrive either as free-form strings (draft mode) or
//! as nullable numbers (stored sessions). Anything that is not a finite number
//! resolves to zero instead of being rejected.

/// Parses a raw text field, treating blank, malformed, or non-finite input as `0.0`.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use chip_settle_core::numeric::parse_lenient;
///
/// assert_eq!(parse_lenient(" 1500 "), 1500.0);
/// assert_eq!(parse_lenient(""), 0.0);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Resolves an optional stored value, treating absent or non-finite values as `0.0`.
#[must_use]
pub fn resolve_optional(value: Option<f64>) -> f64 {
    finite_or_zero(value.unwrap_or(0.0))
}

/// Returns the value unchanged if finite, otherwise `0.0`.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
