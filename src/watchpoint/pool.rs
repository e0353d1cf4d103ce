use std::collections::VecDeque;

use crate::{
    error::WatchpointError,
    evaluate_expression_with,
    interpreter::limits::Limits,
    machine::{Machine, Word},
    watchpoint::report::{Listing, TriggerReport},
};

/// One active watchpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchpoint {
    /// Slot number, stable for the lifetime of the pool.
    pub id:         usize,
    /// The watched expression as the user typed it.
    pub expr:       String,
    /// The value seen at creation or at the last trigger.
    pub last_value: Word,
}

/// A fixed number of watchpoint slots.
///
/// Every slot is either free or active, never both. Free slots are handed out
/// most recently freed first, starting with slot `0` after a reset. Active
/// watchpoints are kept newest first; that is the order of listings and
/// scans.
///
/// The pool holds no lock. The step loop and the monitor shell must not use
/// it concurrently; a multi-threaded host wraps the whole pool in one mutex.
#[derive(Debug, Clone)]
pub struct WatchpointPool {
    slots:  Vec<Option<Watchpoint>>,
    free:   Vec<usize>,
    active: VecDeque<usize>,
    limits: Limits,
}

impl Default for WatchpointPool {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl WatchpointPool {
    /// Creates a pool with `limits.pool_capacity` free slots. The limits are
    /// also used to tokenize every watched expression.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        let mut pool = Self { slots: vec![None; limits.pool_capacity],
                              free: Vec::with_capacity(limits.pool_capacity),
                              active: VecDeque::with_capacity(limits.pool_capacity),
                              limits };
        pool.reset();
        pool
    }

    /// Frees every slot and empties the active list.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev());
        self.active.clear();
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of active watchpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no watchpoint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The active watchpoint in slot `id`, if any.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Watchpoint> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Creates a watchpoint on `expr` and returns its id.
    ///
    /// The expression is evaluated first; its value becomes the baseline for
    /// later scans. The new watchpoint is scanned before all older ones.
    ///
    /// # Errors
    /// - `Expr` if the expression does not evaluate. No slot is taken.
    /// - `PoolExhausted` if every slot is active. Existing watchpoints are
    ///   untouched.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::{machine::sim::SimMachine, watchpoint::WatchpointPool};
    ///
    /// let machine = SimMachine::default();
    /// let mut pool = WatchpointPool::default();
    ///
    /// let id = pool.set_watchpoint("$a0 + 1", &machine).unwrap();
    /// assert_eq!(pool.get(id).unwrap().last_value, 1);
    /// assert!(pool.set_watchpoint("$nope", &machine).is_err());
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn set_watchpoint(&mut self,
                          expr: &str,
                          machine: &dyn Machine)
                          -> Result<usize, WatchpointError> {
        let value = evaluate_expression_with(expr, machine, &self.limits)?;

        let id = self.free
                     .pop()
                     .ok_or(WatchpointError::PoolExhausted { capacity: self.capacity() })?;
        self.slots[id] = Some(Watchpoint { id,
                                           expr: expr.to_string(),
                                           last_value: value });
        self.active.push_front(id);
        Ok(id)
    }

    /// Deletes the active watchpoint `id` and frees its slot.
    ///
    /// Returns `false`, changing nothing, if no active watchpoint has that id.
    /// The remaining watchpoints keep their order.
    pub fn delete_watchpoint(&mut self, id: usize) -> bool {
        let Some(pos) = self.active.iter().position(|&active| active == id) else {
            return false;
        };

        self.active.remove(pos);
        self.slots[id] = None;
        self.free.push(id);
        true
    }

    /// A snapshot of the active watchpoints in scan order.
    #[must_use]
    pub fn list_watchpoints(&self) -> Vec<Watchpoint> {
        self.iter().cloned().collect()
    }

    /// Iterates over the active watchpoints in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Watchpoint> + '_ {
        self.active.iter().filter_map(|&id| self.slots[id].as_ref())
    }

    /// A printable table of the active watchpoints.
    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self)
    }

    /// Re-evaluates every active watchpoint after an instruction at `pc`.
    ///
    /// Watchpoints are visited in scan order. The first one whose value
    /// differs from its stored value is updated and reported, and the scan
    /// stops there: at most one watchpoint triggers per call. `Some` means the
    /// caller should halt the simulation.
    ///
    /// # Errors
    /// `ScanFailed` if an expression that evaluated when it was set no longer
    /// does. Values of watchpoints visited before it are left unchanged.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::{
    ///     machine::{Machine, sim::SimMachine},
    ///     watchpoint::WatchpointPool,
    /// };
    ///
    /// let mut machine = SimMachine::default();
    /// let mut pool = WatchpointPool::default();
    /// let id = pool.set_watchpoint("$t0", &machine).unwrap();
    ///
    /// assert!(pool.scan_watchpoints(&machine, 0x8000_0000).unwrap().is_none());
    ///
    /// machine.write_register("t0", 3);
    /// let report = pool.scan_watchpoints(&machine, 0x8000_0004).unwrap().unwrap();
    /// assert_eq!((report.id, report.old_value, report.new_value), (id, 0, 3));
    /// ```
    pub fn scan_watchpoints(&mut self,
                            machine: &dyn Machine,
                            pc: Word)
                            -> Result<Option<TriggerReport>, WatchpointError> {
        for &id in &self.active {
            let Some(wp) = self.slots[id].as_mut() else {
                continue;
            };

            let new_value =
                evaluate_expression_with(&wp.expr, machine, &self.limits).map_err(|source| {
                    WatchpointError::ScanFailed { id,
                                                  expr: wp.expr.clone(),
                                                  source }
                })?;

            if new_value != wp.last_value {
                let report = TriggerReport { id,
                                             pc,
                                             expr: wp.expr.clone(),
                                             old_value: wp.last_value,
                                             new_value };
                wp.last_value = new_value;
                return Ok(Some(report));
            }
        }

        Ok(None)
    }
}
