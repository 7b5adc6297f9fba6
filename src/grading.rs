use crate::{
    error::{Error, conversion_error::ConversionResult},
    notation::{converter::core::Converter, evaluator::core::evaluate, lexer::tokenize},
    util::{num::approx_eq, text::canonical_answer},
};

/// Default tolerance for numeric answers.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Result of grading a numeric answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    /// `true` if the answer is within tolerance of the expected value.
    pub correct:  bool,
    /// The value the answer was compared against.
    pub expected: f64,
    /// The parsed answer.
    pub answer:   f64,
}

/// Grades a numeric answer to an "evaluate this postfix expression" problem.
///
/// The expected value is recomputed from `postfix` rather than trusted from
/// the caller.
///
/// # Parameters
/// - `postfix`: The postfix expression the user was asked to evaluate.
/// - `answer`: The user's answer as typed; surrounding whitespace is ignored.
/// - `tolerance`: Maximum absolute difference accepted as correct.
///
/// # Errors
/// - `Error::InvalidAnswer` if `answer` is not a number.
/// - `Error::Evaluation` if `postfix` itself does not evaluate.
///
/// # Example
/// ```
/// use postfix_trainer::grading::{DEFAULT_TOLERANCE, check_value_answer};
///
/// let grade = check_value_answer("10 3 /", "3.33333", DEFAULT_TOLERANCE).unwrap();
/// assert!(grade.correct);
///
/// let grade = check_value_answer("10 3 /", "3.3", DEFAULT_TOLERANCE).unwrap();
/// assert!(!grade.correct);
///
/// assert!(check_value_answer("10 3 /", "three", DEFAULT_TOLERANCE).is_err());
/// ```
pub fn check_value_answer(postfix: &str, answer: &str, tolerance: f64) -> Result<Grade, Error> {
    let trimmed = answer.trim();
    let answer = trimmed.parse::<f64>()
                        .map_err(|_| Error::InvalidAnswer { answer: trimmed.to_string() })?;
    let expected = evaluate(postfix)?;

    let correct = approx_eq(answer, expected, tolerance);
    log::debug!("graded value answer {answer} against {expected}: correct = {correct}");

    Ok(Grade { correct,
               expected,
               answer })
}

/// Returns `true` if two postfix answers match once whitespace and ASCII case
/// are disregarded.
///
/// # Example
/// ```
/// use postfix_trainer::grading::postfix_answers_match;
///
/// assert!(postfix_answers_match("a b +", "A B+"));
/// assert!(!postfix_answers_match("a b +", "b a +"));
/// ```
#[must_use]
pub fn postfix_answers_match(expected: &str, answer: &str) -> bool {
    canonical_answer(expected) == canonical_answer(answer)
}

/// Grades a postfix answer to a "convert this infix expression" problem.
///
/// The expected postfix form is computed from `infix` with the default
/// operator table and compared with [`postfix_answers_match`].
///
/// # Errors
/// Returns a `ConversionError` if `infix` cannot be converted.
///
/// # Example
/// ```
/// use postfix_trainer::grading::check_postfix_answer;
///
/// assert!(check_postfix_answer("a + b * c", "abc*+").unwrap());
/// assert!(!check_postfix_answer("a + b * c", "ab+c*").unwrap());
/// ```
pub fn check_postfix_answer(infix: &str, answer: &str) -> ConversionResult<bool> {
    let expected = Converter::new().convert(&tokenize(infix))?;
    Ok(postfix_answers_match(&expected.postfix, answer))
}
