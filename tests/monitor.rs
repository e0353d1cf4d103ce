use sdbexpr::{
    error::{ExprError, MonitorError, WatchpointError},
    interpreter::limits::Limits,
    monitor::{Monitor, run_script},
};

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, &mut Monitor::default(), false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> MonitorError {
    match run_script(src, &mut Monitor::default(), false) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn print_and_assert() {
    let mut monitor = Monitor::default();
    assert_eq!(monitor.execute("p 1+2*3", 1).unwrap(), "7 (0x7)");
    assert_eq!(monitor.execute("p -1", 1).unwrap(),
               "18446744073709551615 (0xffffffffffffffff)");
    assert_success("assert 1\nassert 2 == 2\n# comment\n\nassert !0");
    assert!(matches!(assert_failure("assert 1\nassert 0"),
                     MonitorError::AssertionFailed { line: 2, .. }));
}

#[test]
fn watch_step_and_report() {
    let mut monitor = Monitor::default();
    monitor.execute("set $a0 1", 1).unwrap();
    assert_eq!(monitor.execute("w $a0", 2).unwrap(), "Watchpoint 0: $a0");
    assert_eq!(monitor.execute("si 4", 3).unwrap(), "");
    assert_eq!(monitor.machine().pc(), 0x8000_0010);

    monitor.execute("set $a0 2", 4).unwrap();
    let report = monitor.execute("si 100", 5).unwrap();
    assert_eq!(report,
               "Hint watchpoint 0 at address 0x0000000080000010, expr = $a0\n\
                old value = 0x0000000000000001\n\
                new value = 0x0000000000000002");
    assert_eq!(monitor.machine().pc(), 0x8000_0014);
}

#[test]
fn delete_and_list() {
    let mut monitor = Monitor::default();
    assert_eq!(monitor.execute("info w", 1).unwrap(), "No watchpoints");
    monitor.execute("w 1", 2).unwrap();
    assert_eq!(monitor.execute("d 3", 3).unwrap(), "No watchpoint 3");
    assert_eq!(monitor.execute("d 0", 4).unwrap(), "Deleted watchpoint 0");
    assert!(monitor.watchpoints().is_empty());
}

#[test]
fn registers_and_memory() {
    let mut monitor = Monitor::default();
    let registers = monitor.execute("info r", 1).unwrap();
    assert_eq!(registers.lines().count(), 33);
    assert!(registers.lines().last().unwrap().starts_with("pc"));

    monitor.execute("poke 0x80000000, 0x11223344", 2).unwrap();
    assert_eq!(monitor.execute("x 2 0x80000000", 3).unwrap(),
               "0x0000000080000000: 0x11223344\n0x0000000080000004: 0x00000000");
}

#[test]
fn examine_stops_at_unmapped_memory() {
    let mut monitor = Monitor::default();
    assert!(matches!(monitor.execute("x 18446744073709551615 0x80000000", 1),
                     Err(MonitorError::InvalidArgument { line: 1, .. })));
    assert!(matches!(monitor.execute("x 1000000000 0x8000fff8", 2),
                     Err(MonitorError::InvalidArgument { line: 2, .. })));
    assert!(matches!(monitor.execute("x 3 0xfffffffffffffffc", 3),
                     Err(MonitorError::InvalidArgument { line: 3, .. })));
    assert_eq!(monitor.execute("x 0 0x80000000", 4).unwrap(), "");
}

#[test]
fn errors_carry_line_numbers() {
    assert!(matches!(assert_failure("p 1\nfrob"),
                     MonitorError::UnknownCommand { line: 2, .. }));
    assert!(matches!(assert_failure("p"), MonitorError::MissingArgument { line: 1, .. }));
    assert!(matches!(assert_failure("d x"), MonitorError::InvalidArgument { .. }));
    assert!(matches!(assert_failure("set $zz 1"), MonitorError::RegisterWriteFailed { .. }));
    assert!(matches!(assert_failure("set a0 1"), MonitorError::InvalidArgument { .. }));
    assert!(matches!(assert_failure("poke 0, 1"), MonitorError::MemoryWriteFailed { .. }));
    assert!(matches!(assert_failure("x 1 0"), MonitorError::InvalidArgument { .. }));
    assert!(matches!(assert_failure("p 1 / 0"),
                     MonitorError::Expr { source: ExprError::Eval(_), .. }));
}

#[test]
fn lex_errors_point_at_the_input() {
    let err = assert_failure("p 1 + ?");
    assert!(matches!(err, MonitorError::Expr { source: ExprError::Lex(_), .. }));
    assert!(err.to_string().ends_with("1 + ?\n    ^"));
}

#[test]
fn watchpoint_errors_surface() {
    let mut monitor = Monitor::new(Limits { pool_capacity: 1,
                                            ..Limits::default() },
                                   64);
    monitor.execute("w 1", 1).unwrap();
    assert!(matches!(monitor.execute("w 2", 2),
                     Err(MonitorError::Watchpoint { source: WatchpointError::PoolExhausted { .. },
                                                    .. })));

    let err = assert_failure("set $a0 1\nw 10 / $a0\nset $a0 0\nsi");
    assert!(matches!(err,
                     MonitorError::Watchpoint { source: WatchpointError::ScanFailed { .. },
                                                line:   4, }));
}
