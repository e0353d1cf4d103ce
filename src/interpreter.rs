/// The evaluator module computes the value of a token range.
///
/// The evaluator works directly on the flat token buffer. It strips
/// enclosing parentheses, picks the dominant operator of a range, evaluates
/// both sides recursively and combines them with machine word semantics.
///
/// # Responsibilities
/// - Resolves numbers and register references to words.
/// - Applies unary and binary operators, including memory dereference.
/// - Reports malformed input, unbalanced parentheses and division by zero.
pub mod evaluator;
/// The lexer module tokenizes an expression line.
///
/// The lexer reads the raw input and produces a bounded sequence of tokens:
/// numbers, register references, operators and parentheses. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens, discarding whitespace.
/// - Keeps the exact text of numbers and registers.
/// - Reports the position of input no rule matches.
pub mod lexer;
/// Capacity limits for tokens, register names and watchpoints.
pub mod limits;
/// Operator classification, precedence and associativity.
pub mod operator;
/// Reclassification of prefix `-` and `*` as negation and dereference.
pub mod unary_context;
