use crate::{
    error::{EvaluationError, evaluation_error::EvalResult},
    notation::operator::BinaryOperator,
};

/// Applies a binary operator to two operands.
///
/// `left` is the value that was pushed first, `right` the value on top of the
/// stack. Division checks for an exactly zero divisor; `^` raises `left` to
/// the power `right`. All other results follow IEEE 754 arithmetic.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: One-based token index of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing `left op right`.
///
/// # Example
/// ```
/// use postfix_trainer::notation::{evaluator::binary::apply, operator::BinaryOperator};
///
/// assert_eq!(apply(BinaryOperator::Sub, 7.0, 2.0, 3).unwrap(), 5.0);
/// assert_eq!(apply(BinaryOperator::Pow, 2.0, 10.0, 3).unwrap(), 1024.0);
/// assert!(apply(BinaryOperator::Div, 1.0, 0.0, 3).is_err());
/// ```
pub fn apply(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   return Err(EvaluationError::DivisionByZero { position });
               }
               left / right
           },
           Pow => left.powf(right),
       })
}
