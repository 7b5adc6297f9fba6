/// Parses a postfix operand: digits with optional decimal points, optionally
/// preceded by a single `-`.
///
/// Exponents, a leading `+`, `inf` and `NaN` are rejected, as are texts the
/// lexer accepts but that are not numbers, like `1.2.3`.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If `token` is not a numeric literal.
///
/// ## Example
/// ```
/// use postfix_trainer::util::num::parse_signed_literal;
///
/// assert_eq!(parse_signed_literal("42"), Some(42.0));
/// assert_eq!(parse_signed_literal("-0.5"), Some(-0.5));
/// assert_eq!(parse_signed_literal("-"), None);
/// assert_eq!(parse_signed_literal("--1"), None);
/// assert_eq!(parse_signed_literal("1e3"), None);
/// assert_eq!(parse_signed_literal("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_signed_literal(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);

    if !digits.bytes().any(|b| b.is_ascii_digit())
       || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    {
        return None;
    }

    token.parse().ok()
}

/// Returns `true` if `a` and `b` differ by less than `tolerance`.
///
/// ## Example
/// ```
/// use postfix_trainer::util::num::approx_eq;
///
/// assert!(approx_eq(1.0 / 3.0, 0.3333, 1e-4));
/// assert!(!approx_eq(1.0 / 3.0, 0.333, 1e-4));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
