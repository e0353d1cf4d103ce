/// Default capacity of the token buffer.
pub const MAX_TOKENS: usize = 32;
/// Largest token capacity a [`Limits`] can grant.
///
/// Evaluation recurses at most once per token, so this also bounds the stack
/// depth of one evaluation.
pub const MAX_TOKENS_CEILING: usize = 256;
/// Default maximum length of a register name, without the `$` prefix.
pub const MAX_NAME_LEN: usize = 31;
/// Default number of watchpoint slots.
pub const POOL_CAPACITY: usize = 32;

/// Capacity limits shared by the lexer and the watchpoint pool.
///
/// The defaults reproduce the fixed buffers of the classic monitor. Hosts
/// can raise or lower them. A `max_tokens` above [`MAX_TOKENS_CEILING`] is
/// treated as the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of tokens in one expression.
    pub max_tokens:    usize,
    /// Maximum register name length.
    pub max_name_len:  usize,
    /// Number of watchpoint slots in a pool.
    pub pool_capacity: usize,
}

impl Limits {
    /// The token capacity actually enforced by the lexer.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::interpreter::limits::{Limits, MAX_TOKENS_CEILING};
    ///
    /// assert_eq!(Limits::default().token_capacity(), 32);
    ///
    /// let huge = Limits { max_tokens: 1_000_000,
    ///                     ..Limits::default() };
    /// assert_eq!(huge.token_capacity(), MAX_TOKENS_CEILING);
    /// ```
    #[must_use]
    pub const fn token_capacity(&self) -> usize {
        if self.max_tokens > MAX_TOKENS_CEILING { MAX_TOKENS_CEILING } else { self.max_tokens }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_tokens:    MAX_TOKENS,
               max_name_len:  MAX_NAME_LEN,
               pool_capacity: POOL_CAPACITY, }
    }
}
