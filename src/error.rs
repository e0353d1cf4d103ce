/// Lexing errors.
///
/// Defines all error types that can occur while turning an input line into
/// tokens. Lex errors include unrecognized characters, register names that
/// exceed the configured length, and token buffers that overflow.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a token range.
/// Evaluation errors include malformed expressions, unbalanced parentheses,
/// division by zero and failed register or memory reads.
pub mod eval_error;
/// Combined expression errors.
///
/// Everything `evaluate_expression` can fail with: either the lexer or the
/// evaluator.
pub mod expr_error;
/// Watchpoint pool errors.
pub mod watchpoint_error;
/// Monitor command errors.
///
/// Raised by the command shell; each carries the script line it happened on.
pub mod monitor_error;

pub use eval_error::EvalError;
pub use expr_error::ExprError;
pub use lex_error::LexError;
pub use monitor_error::MonitorError;
pub use watchpoint_error::WatchpointError;
