/// The lexer module tokenizes infix expressions.
///
/// The lexer reads the raw expression text and produces a sequence of typed
/// tokens: numbers, identifiers, operators and parentheses. It is the first
/// stage of conversion and never fails.
///
/// # Responsibilities
/// - Strips whitespace and scans the remaining characters left to right.
/// - Reads numbers and identifiers greedily.
/// - Emits every other character as its own operator-like token.
pub mod lexer;
/// The operator module defines the shared operator vocabulary.
///
/// Both the converter and the evaluator work with the same five binary
/// operators. This module declares them together with the precedence and
/// associativity table the converter consults.
pub mod operator;
/// The converter module turns infix tokens into postfix form.
///
/// Implements the shunting-yard algorithm over the lexer's tokens, driven by
/// an operator table, and optionally records every step it takes.
///
/// # Responsibilities
/// - Orders operands and operators by precedence and associativity.
/// - Resolves parentheses and reports unclosed ones.
/// - Produces a step trace for display.
pub mod converter;
/// The evaluator module runs postfix expressions on a value stack.
///
/// # Responsibilities
/// - Pushes numeric literals and applies operators to the top two values.
/// - Reports empty input, missing operands, division by zero, unknown tokens
///   and leftover values as typed errors.
pub mod evaluator;
