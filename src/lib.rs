//! # sdbexpr
//!
//! sdbexpr is the expression and watchpoint core of an emulator's debugger
//! monitor. It evaluates C-like integer expressions over the emulated
//! machine's registers and memory, and keeps a fixed pool of watchpoints that
//! halt the simulation when the value of their expression changes.

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

use crate::{
    error::ExprError,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, limits::Limits,
        unary_context::resolve_unary_context,
    },
    machine::{Machine, Word},
};

/// Provides unified error types for lexing, evaluation and watchpoints.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression and while managing watchpoints. Every error
/// carries enough context (positions, names, addresses) for the monitor to
/// print a useful diagnostic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator, pool).
/// - Converts between them so `?` propagates to the public entry points.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, unary-context resolution and evaluation
/// over a flat token buffer.
///
/// # Responsibilities
/// - Coordinates the lexer, the unary-context pass and the evaluator.
/// - Defines operators, their precedence and associativity.
/// - Holds the configurable capacity limits.
pub mod interpreter;
/// Access to the emulated machine.
///
/// Declares the capability the evaluator reads registers and memory through,
/// and a small in-memory machine implementing it.
pub mod machine;
/// A line-oriented debugger monitor built on the public API.
pub mod monitor;
/// General utilities for numeric literals.
pub mod util;
/// Watchpoint records and their fixed-capacity pool.
///
/// # Responsibilities
/// - Allocates and frees watchpoint slots.
/// - Captures baseline values and detects changes on every scan.
/// - Formats trigger reports and listings.
pub mod watchpoint;

/// Evaluates an expression against a machine with the default limits.
///
/// The text is tokenized, prefix `-` and `*` are resolved to negation and
/// dereference, and the whole token buffer is evaluated. Evaluation has no
/// side effects, so repeated calls against an unchanged machine return the
/// same value.
///
/// # Errors
/// Returns `ExprError::Lex` if the text cannot be tokenized and
/// `ExprError::Eval` if the tokens do not evaluate.
///
/// # Examples
/// ```
/// use sdbexpr::{evaluate_expression, machine::sim::SimMachine};
///
/// let machine = SimMachine::default();
///
/// assert_eq!(evaluate_expression("1 + 2 * 3", &machine).unwrap(), 7);
/// assert_eq!(evaluate_expression("$pc == 0x80000000", &machine).unwrap(), 1);
///
/// // Division by zero is an error, not a crash.
/// assert!(evaluate_expression("1 / 0", &machine).is_err());
/// ```
pub fn evaluate_expression(text: &str, machine: &dyn Machine) -> Result<Word, ExprError> {
    evaluate_expression_with(text, machine, &Limits::default())
}

/// Evaluates an expression against a machine with explicit limits.
///
/// # Errors
/// Same as [`evaluate_expression`]; the token count and register name length
/// are checked against `limits`.
pub fn evaluate_expression_with(text: &str,
                                machine: &dyn Machine,
                                limits: &Limits)
                                -> Result<Word, ExprError> {
    let mut tokens = tokenize(text, limits)?;
    resolve_unary_context(&mut tokens);

    Ok(Context::new(&tokens, machine).eval_all()?)
}
