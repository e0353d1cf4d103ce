/// The fixed-capacity pool of watchpoint records.
///
/// Slots are allocated from a free list and linked into an ordered active
/// list. Creating a watchpoint captures the current value of its expression;
/// scanning re-evaluates every active expression and reports the first one
/// whose value changed.
pub mod pool;
/// Human-readable output of the pool: trigger reports and listings.
pub mod report;

pub use pool::{Watchpoint, WatchpointPool};
pub use report::{Listing, TriggerReport};
