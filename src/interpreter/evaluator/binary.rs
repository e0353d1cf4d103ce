/// Dispatch of binary operators to their handlers.
pub mod core;
/// Wrapping unsigned arithmetic: `+ - * / %`.
pub mod scalar;
/// Equality operators `==` and `!=`.
pub mod comparison;
/// Logical operators `&&` and `||`.
pub mod logic;
