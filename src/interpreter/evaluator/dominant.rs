use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        operator::Operator,
    },
};

impl Context<'_> {
    /// Finds the operator of `[p, q]` that is applied last.
    ///
    /// Only operators outside of parentheses are candidates. Among them the one
    /// with the highest precedence rank wins. Ties go to the rightmost binary
    /// operator, so `8 - 4 - 2` splits at the second `-`, and to the leftmost
    /// unary operator, so `- - 1` applies the outer negation last.
    ///
    /// # Errors
    /// - `UnmatchedParen` if a `)` has no opening partner in the range, or a
    ///   `(` is never closed.
    /// - `NoDominantOperator` if there is no candidate operator.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::{
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         lexer::tokenize,
    ///         limits::Limits,
    ///         operator::{BinaryOperator, Operator},
    ///         unary_context::resolve_unary_context,
    ///     },
    ///     machine::sim::SimMachine,
    /// };
    ///
    /// let machine = SimMachine::default();
    /// let mut tokens = tokenize("1 + 2 * 3 == 7", &Limits::default()).unwrap();
    /// resolve_unary_context(&mut tokens);
    ///
    /// let context = Context::new(&tokens, &machine);
    /// let (pos, op) = context.dominant_operator(0, 6).unwrap();
    /// assert_eq!(pos, 5);
    /// assert_eq!(op, Operator::Binary(BinaryOperator::Equal));
    /// ```
    pub fn dominant_operator(&self, p: usize, q: usize) -> EvalResult<(usize, Operator)> {
        let mut open = Vec::new();
        let mut dominant: Option<(usize, Operator)> = None;

        for (pos, token) in self.tokens().iter().enumerate().take(q + 1).skip(p) {
            match token {
                Token::LParen => open.push(pos),
                Token::RParen => {
                    open.pop().ok_or(EvalError::UnmatchedParen { position: pos })?;
                },
                _ if !open.is_empty() => {},
                _ => {
                    let Some(op) = Operator::from_token(token) else {
                        continue;
                    };
                    let replace = match dominant {
                        None => true,
                        Some((_, current)) => {
                            op.precedence() > current.precedence()
                            || (op.precedence() == current.precedence()
                                && !op.is_right_associative())
                        },
                    };
                    if replace {
                        dominant = Some((pos, op));
                    }
                },
            }
        }

        if let Some(&position) = open.last() {
            return Err(EvalError::UnmatchedParen { position });
        }

        dominant.ok_or(EvalError::NoDominantOperator { start: p, end: q })
    }
}
