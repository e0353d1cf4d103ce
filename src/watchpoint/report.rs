use crate::{machine::Word, watchpoint::pool::WatchpointPool};

/// What the step loop learns when a watchpoint fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerReport {
    /// The watchpoint that changed.
    pub id:        usize,
    /// Program counter of the instruction after which the change was seen.
    pub pc:        Word,
    /// The watched expression.
    pub expr:      String,
    /// The value before the change.
    pub old_value: Word,
    /// The value now stored in the watchpoint.
    pub new_value: Word,
}

impl std::fmt::Display for TriggerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f,
                 "Hint watchpoint {} at address {:#018x}, expr = {}",
                 self.id, self.pc, self.expr)?;
        writeln!(f, "old value = {:#018x}", self.old_value)?;
        write!(f, "new value = {:#018x}", self.new_value)
    }
}

/// A table of the active watchpoints of a pool, in scan order.
///
/// # Example
/// ```
/// use sdbexpr::{machine::sim::SimMachine, watchpoint::WatchpointPool};
///
/// let machine = SimMachine::default();
/// let mut pool = WatchpointPool::default();
/// assert_eq!(pool.listing().to_string(), "No watchpoints");
///
/// pool.set_watchpoint("1 + 1", &machine).unwrap();
/// let table = pool.listing().to_string();
/// assert!(table.lines().nth(1).unwrap().contains("1 + 1"));
/// ```
pub struct Listing<'a> {
    pool: &'a WatchpointPool,
}

impl<'a> Listing<'a> {
    pub(crate) const fn new(pool: &'a WatchpointPool) -> Self {
        Self { pool }
    }
}

impl std::fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pool.is_empty() {
            return write!(f, "No watchpoints");
        }

        let width = self.pool.iter().map(|wp| wp.expr.len()).max().unwrap_or(0).max(4);
        write!(f, "{:<4}  {:<width$}  {}", "Num", "What", "Value")?;
        for wp in self.pool.iter() {
            write!(f, "\n{:<4}  {:<width$}  {:#018x}", wp.id, wp.expr, wp.last_value)?;
        }
        Ok(())
    }
}
