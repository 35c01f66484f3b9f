/// Core evaluation logic and context.
///
/// Contains the evaluation context, the dispatch over node variants and
/// variable resolution.
pub mod core;

/// Unary operator evaluation logic.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, division and
/// exponentiation of already evaluated operands.
pub mod binary;
