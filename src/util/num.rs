use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, machine::Word};

/// Parses a numeric literal into a machine word.
///
/// A `0x` or `0X` prefix selects base 16; everything else is base 10.
///
/// ## Errors
/// Returns `EvalError::InvalidLiteral` if the text is not a valid literal in
/// its base or does not fit in a `Word`.
///
/// ## Example
/// ```
/// use sdbexpr::util::num::parse_word;
///
/// assert_eq!(parse_word("42").unwrap(), 42);
/// assert_eq!(parse_word("0x2a").unwrap(), 42);
/// assert_eq!(parse_word("0xffffffffffffffff").unwrap(), u64::MAX);
/// assert!(parse_word("0x").is_err());
/// ```
pub fn parse_word(text: &str) -> EvalResult<Word> {
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };

    Word::from_str_radix(digits, radix).map_err(|_| EvalError::InvalidLiteral { text:
                                                                                     text.to_string() })
}

/// Converts a boolean into the `0`/`1` word used by comparison and logical
/// operators.
#[must_use]
pub const fn word_from_bool(b: bool) -> Word {
    if b { 1 } else { 0 }
}
