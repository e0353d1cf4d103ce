/// Core evaluation logic.
///
/// Contains the evaluation context, the recursion over token ranges,
/// parenthesis stripping and operand resolution.
pub mod core;

/// Dominant operator search.
///
/// Finds the operator of a token range that is applied last, honouring
/// bracket depth, precedence and associativity.
pub mod dominant;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, negation and memory dereference.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, equality and logical operators over machine words.
pub mod binary;
