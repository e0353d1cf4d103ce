use sdbexpr::{
    error::{EvalError, ExprError, WatchpointError},
    interpreter::limits::{Limits, POOL_CAPACITY},
    machine::sim::{MEMORY_BASE, SimMachine},
    watchpoint::{TriggerReport, Watchpoint, WatchpointPool},
};

fn ids(pool: &WatchpointPool) -> Vec<usize> {
    pool.list_watchpoints().iter().map(|wp| wp.id).collect()
}

#[test]
fn unchanged_register_does_not_trigger() {
    let mut machine = SimMachine::default();
    machine.write_register("a0", 1);
    let mut pool = WatchpointPool::default();

    pool.set_watchpoint("$a0", &machine).unwrap();
    assert_eq!(pool.scan_watchpoints(&machine, MEMORY_BASE).unwrap(), None);
}

#[test]
fn change_triggers_exactly_once() {
    let mut machine = SimMachine::default();
    machine.write_register("a0", 1);
    let mut pool = WatchpointPool::default();
    let id = pool.set_watchpoint("$a0", &machine).unwrap();

    machine.write_register("a0", 2);
    let report = pool.scan_watchpoints(&machine, MEMORY_BASE + 8).unwrap();
    assert_eq!(report,
               Some(TriggerReport { id,
                                    pc: MEMORY_BASE + 8,
                                    expr: "$a0".to_string(),
                                    old_value: 1,
                                    new_value: 2 }));
    assert_eq!(pool.get(id).unwrap().last_value, 2);

    assert_eq!(pool.scan_watchpoints(&machine, MEMORY_BASE + 12).unwrap(), None);
}

#[test]
fn only_first_changed_watchpoint_is_reported_per_scan() {
    let mut machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    let older = pool.set_watchpoint("$t0", &machine).unwrap();
    let newer = pool.set_watchpoint("$t1 + 1", &machine).unwrap();

    machine.write_register("t0", 10);
    machine.write_register("t1", 10);

    let first = pool.scan_watchpoints(&machine, 0).unwrap().unwrap();
    assert_eq!(first.id, newer);
    assert_eq!(pool.get(older).unwrap().last_value, 0);

    let second = pool.scan_watchpoints(&machine, 0).unwrap().unwrap();
    assert_eq!(second.id, older);
    assert_eq!(second.new_value, 10);

    assert!(pool.scan_watchpoints(&machine, 0).unwrap().is_none());
}

#[test]
fn memory_watchpoint() {
    let mut machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    pool.set_watchpoint("*0x80000010 == 0", &machine).unwrap();

    machine.write_memory(MEMORY_BASE + 0x14, 4, 1);
    assert!(pool.scan_watchpoints(&machine, 0).unwrap().is_none());

    machine.write_memory(MEMORY_BASE + 0x10, 1, 1);
    let report = pool.scan_watchpoints(&machine, 0).unwrap().unwrap();
    assert_eq!((report.old_value, report.new_value), (1, 0));
}

#[test]
fn failed_expression_takes_no_slot() {
    let machine = SimMachine::default();
    let limits = Limits { pool_capacity: 1,
                          ..Limits::default() };
    let mut pool = WatchpointPool::new(limits);

    let err = pool.set_watchpoint("1 / 0", &machine).unwrap_err();
    assert_eq!(err, WatchpointError::Expr(ExprError::Eval(EvalError::DivisionByZero)));
    assert!(pool.set_watchpoint("2 +", &machine).is_err());
    assert!(pool.is_empty());

    assert_eq!(pool.set_watchpoint("1", &machine).unwrap(), 0);
}

#[test]
fn pool_exhaustion() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    assert_eq!(pool.capacity(), POOL_CAPACITY);

    for i in 0..POOL_CAPACITY {
        assert_eq!(pool.set_watchpoint(&i.to_string(), &machine).unwrap(), i);
    }
    let before = pool.list_watchpoints();

    assert_eq!(pool.set_watchpoint("1", &machine),
               Err(WatchpointError::PoolExhausted { capacity: POOL_CAPACITY }));
    assert_eq!(pool.list_watchpoints(), before);
}

#[test]
fn delete_frees_capacity() {
    let machine = SimMachine::default();
    let limits = Limits { pool_capacity: 2,
                          ..Limits::default() };
    let mut pool = WatchpointPool::new(limits);
    pool.set_watchpoint("1", &machine).unwrap();
    pool.set_watchpoint("2", &machine).unwrap();
    assert!(pool.set_watchpoint("3", &machine).is_err());

    assert!(pool.delete_watchpoint(0));
    assert_eq!(ids(&pool), vec![1]);
    assert_eq!(pool.set_watchpoint("3", &machine).unwrap(), 0);
    assert_eq!(ids(&pool), vec![0, 1]);
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    pool.set_watchpoint("1", &machine).unwrap();
    pool.set_watchpoint("2", &machine).unwrap();
    let before = pool.list_watchpoints();

    assert!(!pool.delete_watchpoint(7));
    assert!(!pool.delete_watchpoint(POOL_CAPACITY + 1));
    assert!(pool.delete_watchpoint(1));
    assert!(!pool.delete_watchpoint(1));
    assert_eq!(pool.list_watchpoints(), vec![before[1].clone()]);
}

#[test]
fn listing_is_newest_first() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    pool.set_watchpoint("1 + 1", &machine).unwrap();
    pool.set_watchpoint("0x10", &machine).unwrap();

    assert_eq!(pool.list_watchpoints(),
               vec![Watchpoint { id:         1,
                                 expr:       "0x10".to_string(),
                                 last_value: 16, },
                    Watchpoint { id:         0,
                                 expr:       "1 + 1".to_string(),
                                 last_value: 2, }]);

    let table = pool.listing().to_string();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("Num"));
    assert!(rows[1].starts_with("1 ") && rows[1].contains("0x10"));
    assert!(rows[2].starts_with("0 ") && rows[2].contains("1 + 1"));
}

#[test]
fn scan_failure_is_fatal() {
    let mut machine = SimMachine::default();
    machine.write_register("s0", 1);
    let mut pool = WatchpointPool::default();
    pool.set_watchpoint("100 / $s0", &machine).unwrap();

    machine.write_register("s0", 0);
    let err = pool.scan_watchpoints(&machine, 0).unwrap_err();
    assert_eq!(err,
               WatchpointError::ScanFailed { id:     0,
                                             expr:   "100 / $s0".to_string(),
                                             source: ExprError::Eval(EvalError::DivisionByZero), });
}

#[test]
fn slots_are_handed_out_in_order_and_reused_lifo() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();

    assert_eq!(pool.set_watchpoint("1", &machine).unwrap(), 0);
    assert_eq!(pool.set_watchpoint("2", &machine).unwrap(), 1);
    assert_eq!(pool.set_watchpoint("3", &machine).unwrap(), 2);

    assert!(pool.delete_watchpoint(1));
    assert_eq!(pool.set_watchpoint("4", &machine).unwrap(), 1);
}

#[test]
fn newest_first_order_survives_deletion() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    for expr in ["1", "2", "3", "4"] {
        pool.set_watchpoint(expr, &machine).unwrap();
    }

    assert!(pool.delete_watchpoint(2));
    assert_eq!(ids(&pool), vec![3, 1, 0]);
}

#[test]
fn reset_frees_everything() {
    let machine = SimMachine::default();
    let mut pool = WatchpointPool::default();
    pool.set_watchpoint("1", &machine).unwrap();
    pool.set_watchpoint("2", &machine).unwrap();

    pool.reset();
    assert!(pool.is_empty());
    assert!(pool.get(0).is_none());
    assert_eq!(pool.set_watchpoint("3", &machine).unwrap(), 0);
}

#[test]
fn report_matches_monitor_format() {
    let report = TriggerReport { id:        2,
                                 pc:        0x8000_0010,
                                 expr:      "$a0".to_string(),
                                 old_value: 1,
                                 new_value: 0x20, };
    assert_eq!(report.to_string(),
               "Hint watchpoint 2 at address 0x0000000080000010, expr = $a0\n\
                old value = 0x0000000000000001\n\
                new value = 0x0000000000000020");
}
