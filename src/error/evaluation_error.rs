use crate::notation::operator::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating a postfix
/// expression.
pub enum EvaluationError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// An operator was reached with fewer than two values on the stack.
    #[error("Not enough operands for operator {operator} at token {position}: found {found}, \
             needed 2.")]
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: BinaryOperator,
        /// Number of values available on the stack.
        found:    usize,
        /// One-based index of the operator token.
        position: usize,
    },
    /// The right operand of `/` was exactly zero.
    #[error("Division by zero at token {position}.")]
    DivisionByZero {
        /// One-based index of the `/` token.
        position: usize,
    },
    /// A token is neither an operator nor a signed numeric literal.
    #[error("Invalid token '{token}' at token {position}.")]
    InvalidToken {
        /// The offending token text.
        token:    String,
        /// One-based index of the token.
        position: usize,
    },
    /// The stack did not hold exactly one value after the last token.
    #[error("Invalid postfix expression: {remaining} values left on the stack, expected 1.")]
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;
