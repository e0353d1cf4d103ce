use crate::machine::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token range.
pub enum EvalError {
    /// The token range does not form an expression, e.g. an empty operand.
    Malformed {
        /// First token index of the offending range.
        start: usize,
        /// Last token index of the offending range.
        end:   usize,
    },
    /// A parenthesis has no partner.
    UnmatchedParen {
        /// Token index of the unbalanced parenthesis.
        position: usize,
    },
    /// No operator was found outside of parentheses in a multi-token range.
    NoDominantOperator {
        /// First token index of the range.
        start: usize,
        /// Last token index of the range.
        end:   usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero,
    /// A numeric literal does not fit in a machine word.
    InvalidLiteral {
        /// The literal as typed.
        text: String,
    },
    /// The register file does not know this name.
    RegisterLookupFailed {
        /// The register name, without the `$` prefix.
        name: String,
    },
    /// The memory subsystem refused the read.
    MemoryReadFailed {
        /// The virtual address that was dereferenced.
        address: Word,
        /// The number of bytes requested.
        size:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { start, end } => {
                write!(f, "Malformed expression between tokens {start} and {end}.")
            },
            Self::UnmatchedParen { position } => {
                write!(f, "Unmatched parenthesis at token {position}.")
            },
            Self::NoDominantOperator { start, end } => write!(f,
                                                              "No operator found between tokens {start} and {end}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidLiteral { text } => {
                write!(f, "Literal '{text}' does not fit in a machine word.")
            },
            Self::RegisterLookupFailed { name } => write!(f, "Unknown register '${name}'."),
            Self::MemoryReadFailed { address, size } => {
                write!(f, "Cannot read {size} bytes at address {address:#x}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
