use crate::interpreter::lexer::Token;

/// Reclassifies `-` and `*` that cannot be binary operators.
///
/// A `-` or `*` is binary only when the token before it produces a value
/// (a number, a register or a closing parenthesis). Otherwise `-` becomes
/// [`Token::Neg`] and `*` becomes [`Token::Deref`]. A leading `-` or `*` is
/// therefore always unary.
///
/// Kinds are rewritten in place; the number and text of the tokens do not
/// change.
///
/// # Example
/// ```
/// use sdbexpr::interpreter::{
///     lexer::{Token, tokenize},
///     limits::Limits,
///     unary_context::resolve_unary_context,
/// };
///
/// let mut tokens = tokenize("-1 - *2", &Limits::default()).unwrap();
/// resolve_unary_context(&mut tokens);
/// assert_eq!(tokens[0], Token::Neg);
/// assert_eq!(tokens[2], Token::Minus);
/// assert_eq!(tokens[3], Token::Deref);
/// ```
pub fn resolve_unary_context(tokens: &mut [Token]) {
    let mut after_value = false;

    for token in tokens.iter_mut() {
        if !after_value {
            match token {
                Token::Minus => *token = Token::Neg,
                Token::Star => *token = Token::Deref,
                _ => {},
            }
        }
        after_value = token.produces_value();
    }
}
