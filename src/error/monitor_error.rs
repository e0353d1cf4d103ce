use crate::{
    error::{ExprError, WatchpointError},
    machine::Word,
};

#[derive(Debug)]
/// Represents all errors a monitor command can fail with.
pub enum MonitorError {
    /// The command word is not known.
    UnknownCommand {
        /// The command word.
        command: String,
        /// The script line where the error occurred.
        line:    usize,
    },
    /// The command needs an argument that was not given.
    MissingArgument {
        /// The command word.
        command: String,
        /// The script line where the error occurred.
        line:    usize,
    },
    /// An argument is not of the expected form.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The script line where the error occurred.
        line:    usize,
    },
    /// An expression argument failed to evaluate.
    Expr {
        /// The expression as typed.
        input:  String,
        /// Why it failed.
        source: ExprError,
        /// The script line where the error occurred.
        line:   usize,
    },
    /// A watchpoint could not be created or scanned.
    Watchpoint {
        /// The pool's error.
        source: WatchpointError,
        /// The script line where the error occurred.
        line:   usize,
    },
    /// `set` named a register the machine does not have.
    RegisterWriteFailed {
        /// The register name.
        name: String,
        /// The script line where the error occurred.
        line: usize,
    },
    /// `poke` targeted an address outside of memory.
    MemoryWriteFailed {
        /// The target address.
        address: Word,
        /// The script line where the error occurred.
        line:    usize,
    },
    /// `assert` evaluated to zero.
    AssertionFailed {
        /// The asserted expression.
        expr: String,
        /// The script line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { command, line } => {
                write!(f, "Error on line {line}: Unknown command '{command}'.")
            },
            Self::MissingArgument { command, line } => {
                write!(f, "Error on line {line}: '{command}' needs an argument.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::Expr { input, source: ExprError::Lex(e), line } => {
                write!(f, "Error on line {line}: {}", e.render(input))
            },
            Self::Expr { source, line, .. } => write!(f, "Error on line {line}: {source}"),
            Self::Watchpoint { source, line } => write!(f, "Error on line {line}: {source}"),
            Self::RegisterWriteFailed { name, line } => {
                write!(f, "Error on line {line}: Unknown register '${name}'.")
            },
            Self::MemoryWriteFailed { address, line } => {
                write!(f, "Error on line {line}: Cannot write memory at {address:#x}.")
            },
            Self::AssertionFailed { expr, line } => {
                write!(f, "Error on line {line}: Assertion failed: {expr}.")
            },
        }
    }
}

impl std::error::Error for MonitorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expr { source, .. } => Some(source),
            Self::Watchpoint { source, .. } => Some(source),
            _ => None,
        }
    }
}
