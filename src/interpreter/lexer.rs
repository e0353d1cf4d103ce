use logos::Logos;

use crate::{error::LexError, interpreter::limits::Limits};

/// Represents a lexical token of a debugger expression.
///
/// Every `#[token]`/`#[regex]` attribute is one lexical rule. Whitespace is
/// skipped and produces no token. `Neg` and `Deref` carry no rule: the lexer
/// always emits `Minus` and `Star`, and
/// [`resolve_unary_context`](crate::interpreter::unary_context::resolve_unary_context)
/// reclassifies them afterwards.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal, hexadecimal (`0x1f`) or decimal (`42`), exactly as
    /// typed.
    #[regex(r"0x[0-9a-fA-F]{1,16}", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]{1,10}", |lex| lex.slice().to_string())]
    Number(String),
    /// Register reference such as `$a0`, including the `$`.
    #[regex(r"\$[a-zA-Z0-9]+", |lex| lex.slice().to_string())]
    Register(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Unary `-`.
    Neg,
    /// Unary `*`, a 4-byte memory read.
    Deref,
}

impl Token {
    /// Whether the token ends an operand, so that a following `-` or `*` is
    /// binary.
    #[must_use]
    pub const fn produces_value(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Register(_) | Self::RParen)
    }

    /// The source text of the token. Unary operators render like their binary
    /// spelling.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Register(text) => text,
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::AndAnd => "&&",
            Self::PipePipe => "||",
            Self::Plus => "+",
            Self::Minus | Self::Neg => "-",
            Self::Star | Self::Deref => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Splits an input line into tokens.
///
/// Scans from the start of the line, matching one rule at a time. Register
/// names are checked against `limits.max_name_len` and the token count against
/// [`Limits::token_capacity`].
///
/// # Errors
/// - `UnrecognizedInput` with the byte position and offending text if no rule
///   matches.
/// - `NameTooLong` if a register name exceeds the limit.
/// - `TooManyTokens` if the expression does not fit in the token buffer.
///
/// # Example
/// ```
/// use sdbexpr::interpreter::{
///     lexer::{Token, tokenize},
///     limits::Limits,
/// };
///
/// let tokens = tokenize("0x10 + $sp", &Limits::default()).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("0x10".to_string()),
///                 Token::Plus,
///                 Token::Register("$sp".to_string())]);
/// ```
pub fn tokenize(input: &str, limits: &Limits) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(LexError::UnrecognizedInput { position: lexer.span().start,
                                                     text:     lexer.slice().to_string(), });
        };

        if let Token::Register(name) = &token {
            let len = name.len() - 1;
            if len > limits.max_name_len {
                return Err(LexError::NameTooLong { position: lexer.span().start,
                                                   len,
                                                   limit: limits.max_name_len });
            }
        }

        if tokens.len() == limits.token_capacity() {
            return Err(LexError::TooManyTokens { limit: limits.token_capacity() });
        }
        tokens.push(token);
    }

    Ok(tokens)
}
