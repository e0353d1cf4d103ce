/// Numeric literal helpers.
///
/// This module turns the text of a numeric token into a machine word, picking
/// the base from the prefix the way C's `strtoul(text, NULL, 0)` does for the
/// literal forms the lexer accepts.
///
/// All functions return a `Result`, which is `Ok` if the text is a valid
/// literal that fits in a word, or an error naming the offending text.
pub mod num;
