/// Numeric parsing and comparison helpers.
///
/// This module provides the strict literal parser the evaluator uses for
/// postfix tokens and the tolerance comparison used when grading numeric
/// answers.
pub mod num;
/// Text normalisation helpers.
///
/// Spacing and case normalisation for postfix expressions, used for display
/// and for comparing a user's postfix answer with the expected one.
pub mod text;
