use postfix_trainer::{
    error::{ConversionError, Error, EvaluationError},
    grading::{DEFAULT_TOLERANCE, check_postfix_answer, check_value_answer, postfix_answers_match},
};

#[test]
fn value_answer_within_tolerance_is_correct() {
    let grade = check_value_answer("2 3 4 * +", " 14 ", DEFAULT_TOLERANCE).unwrap();
    assert!(grade.correct);
    assert_eq!(grade.expected, 14.0);
    assert_eq!(grade.answer, 14.0);

    assert!(check_value_answer("1 3 /", "0.33334", DEFAULT_TOLERANCE).unwrap().correct);
}

#[test]
fn value_answer_outside_tolerance_is_incorrect() {
    let grade = check_value_answer("2 3 4 * +", "20", DEFAULT_TOLERANCE).unwrap();
    assert!(!grade.correct);
    assert_eq!(grade.expected, 14.0);

    assert!(!check_value_answer("1 3 /", "0.33", DEFAULT_TOLERANCE).unwrap().correct);
    assert!(check_value_answer("1 3 /", "0.33", 0.01).unwrap().correct);
}

#[test]
fn negative_value_answers_are_accepted() {
    assert!(check_value_answer("2 5 -", "-3", DEFAULT_TOLERANCE).unwrap().correct);
}

#[test]
fn unparseable_value_answer_is_an_error() {
    assert_eq!(check_value_answer("1 1 +", "two", DEFAULT_TOLERANCE),
               Err(Error::InvalidAnswer { answer: "two".to_string() }));
}

#[test]
fn value_answer_for_invalid_postfix_reports_evaluation_error() {
    assert_eq!(check_value_answer("4 0 /", "0", DEFAULT_TOLERANCE),
               Err(Error::Evaluation(EvaluationError::DivisionByZero { position: 3 })));
}

#[test]
fn postfix_answers_ignore_spacing_and_case() {
    assert!(postfix_answers_match("a b c * +", "abc*+"));
    assert!(postfix_answers_match("a b +", " A\tB + "));
    assert!(!postfix_answers_match("a b c * +", "a b + c *"));
}

#[test]
fn postfix_answer_is_checked_against_conversion() {
    assert!(check_postfix_answer("(a + b) * c", "a b + c *").unwrap());
    assert!(check_postfix_answer("2^3^2", "232^^").unwrap());
    assert!(!check_postfix_answer("2^3^2", "23^2^").unwrap());
}

#[test]
fn postfix_answer_for_unconvertible_infix_is_an_error() {
    assert_eq!(check_postfix_answer("(a + b", "a b +"),
               Err(ConversionError::MismatchedParentheses { position: 1 }));
}
