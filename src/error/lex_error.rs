#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// No lexical rule matches at this position.
    UnrecognizedInput {
        /// Byte offset of the first unmatched character.
        position: usize,
        /// The offending text.
        text:     String,
    },
    /// The expression produced more tokens than the buffer holds.
    TooManyTokens {
        /// The configured token capacity.
        limit: usize,
    },
    /// A register name is longer than the configured maximum.
    NameTooLong {
        /// Byte offset of the register token.
        position: usize,
        /// Length of the name without the `$` prefix.
        len:      usize,
        /// The configured maximum length.
        limit:    usize,
    },
}

impl LexError {
    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedInput { position, .. } | Self::NameTooLong { position, .. } => {
                Some(*position)
            },
            Self::TooManyTokens { .. } => None,
        }
    }

    /// Renders the error followed by the input line with a caret under the
    /// failing character. The caret column counts characters, not bytes.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::error::LexError;
    ///
    /// let err = LexError::UnrecognizedInput { position: 2,
    ///                                         text:     "@".to_string(), };
    /// let shown = err.render("1 @ 2");
    /// assert!(shown.ends_with("1 @ 2\n  ^"));
    ///
    /// let err = LexError::UnrecognizedInput { position: 3,
    ///                                         text:     "@".to_string(), };
    /// assert!(err.render("é @").ends_with("é @\n  ^"));
    /// ```
    #[must_use]
    pub fn render(&self, input: &str) -> String {
        match self.position() {
            Some(position) => {
                let column = input.get(..position).map_or(position, |before| before.chars().count());
                format!("{self}\n{input}\n{:>width$}", "^", width = column + 1)
            },
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { position, text } => {
                write!(f, "No match at position {position}: '{text}'.")
            },
            Self::TooManyTokens { limit } => {
                write!(f, "Expression has too many tokens. The limit is {limit}.")
            },
            Self::NameTooLong { position, len, limit } => write!(f,
                                                                 "Register name at position {position} is {len} characters long, but the limit is {limit}."),
        }
    }
}

impl std::error::Error for LexError {}
