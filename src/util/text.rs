/// Normalises the spacing of a postfix expression.
///
/// Tokens are split on any whitespace and joined by a single space.
///
/// ## Example
/// ```
/// use postfix_trainer::util::text::format_postfix;
///
/// assert_eq!(format_postfix("  3   4\t+ "), "3 4 +");
/// ```
#[must_use]
pub fn format_postfix(expression: &str) -> String {
    expression.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduces a postfix answer to a canonical form for comparison: all
/// whitespace removed, ASCII letters upper-cased.
#[must_use]
pub fn canonical_answer(answer: &str) -> String {
    answer.chars()
          .filter(|c| !c.is_whitespace())
          .map(|c| c.to_ascii_uppercase())
          .collect()
}
