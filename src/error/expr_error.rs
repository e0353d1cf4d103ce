use crate::error::{EvalError, LexError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of `evaluate_expression`.
pub enum ExprError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens could not be evaluated.
    Eval(EvalError),
}

impl From<LexError> for ExprError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
