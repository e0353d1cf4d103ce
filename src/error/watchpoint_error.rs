use crate::error::ExprError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised by the watchpoint pool.
pub enum WatchpointError {
    /// The expression of a new watchpoint failed to evaluate. No slot was
    /// taken.
    Expr(ExprError),
    /// Every slot of the pool is in use.
    PoolExhausted {
        /// Number of slots in the pool.
        capacity: usize,
    },
    /// An active watchpoint stopped evaluating during a scan.
    ScanFailed {
        /// The watchpoint that failed.
        id:     usize,
        /// Its expression text.
        expr:   String,
        /// Why re-evaluation failed.
        source: ExprError,
    },
}

impl From<ExprError> for WatchpointError {
    fn from(e: ExprError) -> Self {
        Self::Expr(e)
    }
}

impl std::fmt::Display for WatchpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expr(e) => write!(f, "Cannot set watchpoint: {e}"),
            Self::PoolExhausted { capacity } => {
                write!(f, "All {capacity} watchpoints are in use.")
            },
            Self::ScanFailed { id, expr, source } => write!(f,
                                                            "Watchpoint {id} ({expr}) can no longer be evaluated: {source}"),
        }
    }
}

impl std::error::Error for WatchpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expr(e) | Self::ScanFailed { source: e, .. } => Some(e),
            Self::PoolExhausted { .. } => None,
        }
    }
}
