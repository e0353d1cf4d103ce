use crate::{
    error::EvalError,
    interpreter::{lexer::Token, operator::Operator},
    machine::{Machine, Word},
    util::num::parse_word,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation context.
///
/// This struct borrows the resolved token buffer of one expression and the
/// machine whose registers and memory the expression reads. Evaluation works
/// directly on inclusive index ranges of the buffer; no tree is built.
///
/// ## Usage
///
/// A `Context` is created per expression after tokenizing and resolving
/// unary operators. It is cheap and holds no state of its own, so evaluating
/// the same context twice against an unchanged machine yields the same value.
pub struct Context<'a> {
    tokens:  &'a [Token],
    machine: &'a dyn Machine,
}

impl<'a> Context<'a> {
    /// Creates a context over a resolved token buffer.
    #[must_use]
    pub fn new(tokens: &'a [Token], machine: &'a dyn Machine) -> Self {
        Self { tokens, machine }
    }

    /// The token buffer being evaluated.
    #[must_use]
    pub const fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// The machine operands are read from.
    #[must_use]
    pub fn machine(&self) -> &'a dyn Machine {
        self.machine
    }

    /// Evaluates the whole token buffer.
    ///
    /// # Errors
    /// Returns `Malformed` for an empty buffer, otherwise whatever
    /// [`Context::eval`] reports.
    pub fn eval_all(&self) -> EvalResult<Word> {
        match self.tokens.len() {
            0 => Err(EvalError::Malformed { start: 0, end: 0 }),
            len => self.eval(0, len - 1),
        }
    }

    /// Evaluates the inclusive token range `[p, q]`.
    ///
    /// - A single token must be a number or a register.
    /// - A range wrapped in one matching pair of parentheses is evaluated
    ///   without them.
    /// - Anything else is split at its dominant operator, and the operands are
    ///   evaluated recursively. Both operands are always evaluated, so `&&` and
    ///   `||` do not short-circuit.
    ///
    /// The first error aborts the whole evaluation.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::{
    ///     interpreter::{
    ///         evaluator::core::Context, lexer::tokenize, limits::Limits,
    ///         unary_context::resolve_unary_context,
    ///     },
    ///     machine::sim::SimMachine,
    /// };
    ///
    /// let machine = SimMachine::default();
    /// let mut tokens = tokenize("(1 + 2) * 3", &Limits::default()).unwrap();
    /// resolve_unary_context(&mut tokens);
    ///
    /// let context = Context::new(&tokens, &machine);
    /// assert_eq!(context.eval(0, 6).unwrap(), 9);
    /// assert_eq!(context.eval(1, 3).unwrap(), 3);
    /// ```
    pub fn eval(&self, p: usize, q: usize) -> EvalResult<Word> {
        if p > q || q >= self.tokens.len() {
            return Err(EvalError::Malformed { start: p, end: q });
        }

        if p == q {
            return self.eval_operand(p);
        }

        if self.check_parentheses(p, q) {
            return self.eval(p + 1, q - 1);
        }

        let (op_pos, op) = self.dominant_operator(p, q)?;
        match op {
            Operator::Unary(op) => {
                if op_pos != p {
                    return Err(EvalError::Malformed { start: p, end: op_pos });
                }
                let value = self.eval(op_pos + 1, q)?;
                self.eval_unary(op, value)
            },
            Operator::Binary(op) => {
                if op_pos == p {
                    return Err(EvalError::Malformed { start: p, end: p });
                }
                let left = self.eval(p, op_pos - 1)?;
                let right = self.eval(op_pos + 1, q)?;
                Self::eval_binary(op, left, right)
            },
        }
    }

    /// Resolves a single number or register token.
    fn eval_operand(&self, pos: usize) -> EvalResult<Word> {
        match &self.tokens[pos] {
            Token::Number(text) => parse_word(text),
            Token::Register(text) => {
                let name = text.strip_prefix('$').unwrap_or(text);
                self.machine
                    .read_register(name)
                    .ok_or_else(|| EvalError::RegisterLookupFailed { name: name.to_string() })
            },
            _ => Err(EvalError::Malformed { start: pos, end: pos }),
        }
    }

    /// Whether `[p, q]` is one parenthesized group, i.e. the `(` at `p` is
    /// closed by the `)` at `q` and not earlier.
    ///
    /// `(1 + 2) * (3)` starts and ends with parentheses but is two groups, so
    /// this returns `false` for it.
    #[must_use]
    pub fn check_parentheses(&self, p: usize, q: usize) -> bool {
        if self.tokens[p] != Token::LParen || self.tokens[q] != Token::RParen {
            return false;
        }

        let mut depth = 0usize;
        for (i, token) in self.tokens[p..=q].iter().enumerate() {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return p + i == q;
                    }
                },
                _ => {},
            }
        }
        false
    }
}
