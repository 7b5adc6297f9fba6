//! # postfix-trainer
//!
//! postfix-trainer is the expression engine behind a postfix notation drill.
//! It tokenizes infix expressions, converts them to postfix with the
//! shunting-yard algorithm (optionally recording every step for display), and
//! evaluates postfix expressions on a value stack.
//!
//! All functions are pure: no state outlives a call, so everything here can
//! be used from any number of threads without synchronisation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::{Error, conversion_error::ConversionResult};

/// Provides the error types for conversion, evaluation and grading.
///
/// This module defines every failure the engine reports. No operation panics
/// on bad input; each failure is returned as a typed value carrying a
/// descriptive message.
///
/// # Responsibilities
/// - Defines `ConversionError` for the shunting-yard stage.
/// - Defines `EvaluationError` for the postfix stack machine.
/// - Combines both, plus answer parsing failures, in `Error`.
pub mod error;
/// Answer checking for quiz problems.
///
/// Grades numeric answers to evaluation problems within a tolerance and
/// postfix answers to conversion problems up to spacing and case.
pub mod grading;
/// Tokenizer, converter and evaluator.
///
/// This module holds the expression engine proper, split into its pipeline
/// stages together with the operator vocabulary they share.
///
/// # Responsibilities
/// - Turns infix text into typed tokens.
/// - Converts infix tokens to postfix and traces the conversion.
/// - Evaluates postfix expressions.
pub mod notation;
/// General helpers for literal parsing and text normalisation.
pub mod util;

pub use crate::{
    notation::{
        converter::{
            core::{Conversion, Converter},
            step::{ConversionStep, StepAction},
        },
        evaluator::core::{Validity, evaluate, is_valid},
        lexer::{Token, tokenize},
    },
    util::text::format_postfix,
};

/// Converts an infix expression to postfix using the default operator table.
///
/// # Errors
/// Returns a `ConversionError` if a parenthesis is left open or an unknown
/// operator symbol appears.
///
/// # Example
/// ```
/// use postfix_trainer::convert;
///
/// assert_eq!(convert("2+3*4").unwrap().postfix, "2 3 4 * +");
/// assert_eq!(convert("2^3^2").unwrap().postfix, "2 3 2 ^ ^");
/// assert!(convert("(2+3").is_err());
/// ```
pub fn convert(infix: &str) -> ConversionResult<Conversion> {
    convert_tokens(&tokenize(infix))
}

/// Converts an already tokenized infix expression to postfix using the
/// default operator table.
///
/// # Errors
/// Same as [`convert`].
pub fn convert_tokens(tokens: &[Token]) -> ConversionResult<Conversion> {
    Converter::new().convert(tokens)
}

/// Converts an infix expression to postfix and records each conversion step.
///
/// # Errors
/// Same as [`convert`].
///
/// # Example
/// ```
/// use postfix_trainer::convert_with_steps;
///
/// let conversion = convert_with_steps("a*b").unwrap();
/// let steps = conversion.steps.unwrap();
///
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[3].action.to_string(), "Pop remaining operators: *");
/// assert_eq!(steps[3].output, "a b *");
/// ```
pub fn convert_with_steps(infix: &str) -> ConversionResult<Conversion> {
    Converter::new().convert_traced(&tokenize(infix))
}

/// A solved "evaluate" problem: the postfix form and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The postfix form of the infix input.
    pub postfix: String,
    /// The value of the expression.
    pub value:   f64,
}

/// Converts an infix expression to postfix and evaluates the result.
///
/// Expressions containing identifiers convert but fail to evaluate with
/// `InvalidToken`.
///
/// # Errors
/// Returns `Error::Conversion` or `Error::Evaluation` for the stage that
/// failed.
///
/// # Example
/// ```
/// use postfix_trainer::solve;
///
/// let solution = solve("(2+3)*4").unwrap();
/// assert_eq!(solution.postfix, "2 3 + 4 *");
/// assert_eq!(solution.value, 20.0);
///
/// assert!(solve("a+1").is_err());
/// ```
pub fn solve(infix: &str) -> Result<Solution, Error> {
    let conversion = convert(infix)?;
    let value = evaluate(&conversion.postfix)?;

    Ok(Solution { postfix: conversion.postfix,
                  value })
}
