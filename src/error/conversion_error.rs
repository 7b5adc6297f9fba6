/// Represents all errors that can occur during infix to postfix conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// An opening parenthesis `(` was still on the operator stack when the
    /// input ran out.
    #[error("Mismatched parentheses: '(' at token {position} is never closed.")]
    MismatchedParentheses {
        /// One-based index of the unclosed `(` in the input tokens.
        position: usize,
    },
    /// An operator-like token has no entry in the operator table.
    #[error("Invalid token '{token}' at token {position}.")]
    InvalidToken {
        /// The offending symbol.
        token:    String,
        /// One-based index of the token in the input.
        position: usize,
    },
}

/// Result type used by the converter.
pub type ConversionResult<T> = Result<T, ConversionError>;
