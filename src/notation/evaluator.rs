/// Core evaluation logic.
///
/// Contains the postfix stack machine and the validity check built on it.
pub mod core;

/// Binary operator evaluation.
///
/// Applies an operator to the two values popped from the stack.
pub mod binary;
