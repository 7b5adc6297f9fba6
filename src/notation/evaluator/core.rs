use crate::{
    error::{EvaluationError, evaluation_error::EvalResult},
    notation::{evaluator::binary::apply, operator::BinaryOperator},
    util::num::parse_signed_literal,
};

/// Evaluates a postfix expression.
///
/// The input is split on whitespace and processed left to right. Numeric
/// literals, optionally with one leading `-`, are pushed onto the stack. Each
/// of `+ - * / ^` pops the right operand, then the left operand, and pushes
/// the result. Token order is evaluation order; no precedence applies.
///
/// # Parameters
/// - `postfix`: The postfix expression, e.g. `"3 4 + 5 *"`.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `EmptyExpression` if the input has no tokens.
/// - `InsufficientOperands` if an operator finds fewer than two values.
/// - `DivisionByZero` if the right operand of `/` is zero.
/// - `InvalidToken` if a token is neither an operator nor a number.
/// - `MalformedExpression` if the stack does not end with exactly one value.
///
/// # Example
/// ```
/// use postfix_trainer::{error::EvaluationError, notation::evaluator::core::evaluate};
///
/// assert_eq!(evaluate("2 3 4 * +").unwrap(), 14.0);
/// assert_eq!(evaluate("-2 3 *").unwrap(), -6.0);
/// assert!(matches!(evaluate("4 0 /"), Err(EvaluationError::DivisionByZero { .. })));
/// assert!(matches!(evaluate("1 2"), Err(EvaluationError::MalformedExpression { remaining: 2 })));
/// ```
pub fn evaluate(postfix: &str) -> EvalResult<f64> {
    let tokens: Vec<&str> = postfix.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.into_iter().enumerate() {
        let position = i + 1;

        if let Some(value) = parse_signed_literal(token) {
            log::trace!("push {value}");
            stack.push(value);
            continue;
        }

        let Some(op) = BinaryOperator::from_token(token) else {
            return Err(EvaluationError::InvalidToken { token: token.to_string(),
                                                       position });
        };

        let found = stack.len();
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(EvaluationError::InsufficientOperands { operator: op,
                                                               found,
                                                               position });
        };

        let result = apply(op, left, right, position)?;
        log::trace!("{left} {op} {right} = {result}");
        stack.push(result);
    }

    match stack.as_slice() {
        [value] => {
            log::debug!("evaluated '{postfix}' to {value}");
            Ok(*value)
        },
        _ => Err(EvaluationError::MalformedExpression { remaining: stack.len() }),
    }
}

/// Outcome of a validity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    /// `true` if the expression evaluated successfully.
    pub valid: bool,
    /// The failure message, when `valid` is `false`.
    pub error: Option<String>,
}

impl<T> From<EvalResult<T>> for Validity {
    fn from(result: EvalResult<T>) -> Self {
        match result {
            Ok(_) => Self { valid: true,
                            error: None },
            Err(e) => Self { valid: false,
                             error: Some(e.to_string()) },
        }
    }
}

/// Checks whether a postfix expression evaluates successfully.
///
/// Runs [`evaluate`] and reports the outcome instead of returning the error.
///
/// # Example
/// ```
/// use postfix_trainer::notation::evaluator::core::is_valid;
///
/// assert!(is_valid("1 2 +").valid);
///
/// let check = is_valid("3 +");
/// assert!(!check.valid);
/// assert!(check.error.unwrap().starts_with("Not enough operands"));
/// ```
#[must_use]
pub fn is_valid(postfix: &str) -> Validity {
    evaluate(postfix).into()
}
