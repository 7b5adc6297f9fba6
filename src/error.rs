/// Conversion errors.
///
/// Defines the errors that can occur while turning an infix token sequence
/// into postfix form, such as an opening parenthesis that is never closed or
/// an operator symbol missing from the operator table.
pub mod conversion_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while running a postfix
/// expression on the evaluation stack: empty input, missing operands,
/// division by zero, unknown tokens and leftover values.
pub mod evaluation_error;

pub use conversion_error::ConversionError;
pub use evaluation_error::EvaluationError;

/// Umbrella error for operations that chain several stages.
///
/// `solve` and the grading helpers both convert and evaluate, so they can
/// fail in either stage. The stage-specific error is kept intact and can be
/// matched on directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The infix expression could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The postfix expression could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// A user supplied answer is not a number.
    #[error("Invalid answer format: '{answer}' is not a number.")]
    InvalidAnswer {
        /// The rejected answer text.
        answer: String,
    },
}
