use crate::{
    error::MonitorError,
    evaluate_expression_with,
    interpreter::{lexer::tokenize, limits::Limits},
    machine::{DEREF_SIZE, Machine, Word, sim::SimMachine},
    watchpoint::WatchpointPool,
};

/// Result type of monitor commands.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Bytes advanced by one `si` step.
pub const INSTRUCTION_SIZE: Word = 4;

/// The debugger shell around a [`SimMachine`] and a [`WatchpointPool`].
///
/// Commands (one per line):
///
/// ```text
/// p EXPR                 print the value of EXPR
/// w EXPR                 watch EXPR
/// d N                    delete watchpoint N
/// info w | info r        list watchpoints | dump registers
/// set $REG EXPR          write a register
/// poke ADDR, VALUE       write a 4-byte word to memory
/// x N EXPR               examine N 4-byte words at EXPR
/// si [N]                 step N instructions, stopping at a watchpoint
/// assert EXPR            fail unless EXPR is nonzero
/// ```
///
/// Stepping has no CPU behind it: it only advances `pc` and scans the
/// watchpoints, so registers and memory change through `set` and `poke`.
pub struct Monitor {
    machine:     SimMachine,
    watchpoints: WatchpointPool,
    limits:      Limits,
    trace:       bool,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(Limits::default(), crate::machine::sim::DEFAULT_MEMORY_SIZE)
    }
}

impl Monitor {
    /// Creates a monitor over a fresh machine with `memory_size` bytes of
    /// memory and an empty watchpoint pool.
    #[must_use]
    pub fn new(limits: Limits, memory_size: usize) -> Self {
        Self { machine: SimMachine::new(memory_size),
               watchpoints: WatchpointPool::new(limits),
               limits,
               trace: false }
    }

    /// Echo every lexed token of evaluated expressions to stderr.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The simulated machine.
    #[must_use]
    pub const fn machine(&self) -> &SimMachine {
        &self.machine
    }

    /// The watchpoint pool.
    #[must_use]
    pub const fn watchpoints(&self) -> &WatchpointPool {
        &self.watchpoints
    }

    /// Runs one command and returns its output, which may be empty.
    ///
    /// `line` is only used for error messages.
    ///
    /// # Example
    /// ```
    /// use sdbexpr::monitor::Monitor;
    ///
    /// let mut monitor = Monitor::default();
    /// monitor.execute("set $a0 0x10", 1).unwrap();
    /// assert_eq!(monitor.execute("p $a0 * 2", 2).unwrap(), "32 (0x20)");
    /// assert_eq!(monitor.execute("w $a0", 3).unwrap(), "Watchpoint 0: $a0");
    /// ```
    pub fn execute(&mut self, command: &str, line: usize) -> MonitorResult<String> {
        let command = command.trim();
        let (word, rest) = command.split_once(char::is_whitespace)
                                  .map_or((command, ""), |(w, r)| (w, r.trim()));

        match word {
            "p" => {
                let value = self.evaluate(required(word, rest, line)?, line)?;
                Ok(format!("{value} ({value:#x})"))
            },
            "w" => {
                let expr = required(word, rest, line)?;
                self.trace_tokens(expr);
                let id = self.watchpoints
                             .set_watchpoint(expr, &self.machine)
                             .map_err(|source| MonitorError::Watchpoint { source, line })?;
                Ok(format!("Watchpoint {id}: {expr}"))
            },
            "d" => {
                let id = parse_count(required(word, rest, line)?, line)?;
                if self.watchpoints.delete_watchpoint(id) {
                    Ok(format!("Deleted watchpoint {id}"))
                } else {
                    Ok(format!("No watchpoint {id}"))
                }
            },
            "info" => match required(word, rest, line)? {
                "w" => Ok(self.watchpoints.listing().to_string()),
                "r" => Ok(self.registers()),
                other => Err(MonitorError::InvalidArgument { details: format!("info {other}"),
                                                             line }),
            },
            "set" => self.set_register(required(word, rest, line)?, line),
            "poke" => self.poke(required(word, rest, line)?, line),
            "x" => self.examine(required(word, rest, line)?, line),
            "si" => {
                let steps = if rest.is_empty() { 1 } else { parse_count(rest, line)? };
                self.step(steps, line)
            },
            "assert" => {
                let expr = required(word, rest, line)?;
                if self.evaluate(expr, line)? == 0 {
                    return Err(MonitorError::AssertionFailed { expr: expr.to_string(),
                                                               line });
                }
                Ok(String::new())
            },
            _ => Err(MonitorError::UnknownCommand { command: word.to_string(),
                                                    line }),
        }
    }

    /// Advances `pc` one instruction at a time, scanning the watchpoints after
    /// each step. Stops early at the first trigger and returns its report.
    fn step(&mut self, steps: usize, line: usize) -> MonitorResult<String> {
        for _ in 0..steps {
            let pc = self.machine.pc();
            self.machine.set_pc(pc.wrapping_add(INSTRUCTION_SIZE));

            let report = self.watchpoints
                             .scan_watchpoints(&self.machine, pc)
                             .map_err(|source| MonitorError::Watchpoint { source, line })?;
            if let Some(report) = report {
                return Ok(report.to_string());
            }
        }
        Ok(String::new())
    }

    fn set_register(&mut self, args: &str, line: usize) -> MonitorResult<String> {
        let Some((name, expr)) = args.split_once(char::is_whitespace) else {
            return Err(MonitorError::MissingArgument { command: "set".to_string(),
                                                       line });
        };
        let Some(name) = name.strip_prefix('$') else {
            return Err(MonitorError::InvalidArgument { details: format!("'{name}' is not a register"),
                                                       line });
        };

        let value = self.evaluate(expr.trim(), line)?;
        if !self.machine.write_register(name, value) {
            return Err(MonitorError::RegisterWriteFailed { name: name.to_string(),
                                                           line });
        }
        Ok(String::new())
    }

    fn poke(&mut self, args: &str, line: usize) -> MonitorResult<String> {
        let Some((address, value)) = args.split_once(',') else {
            return Err(MonitorError::InvalidArgument { details: "expected 'poke ADDR, VALUE'".to_string(),
                                                       line });
        };

        let address = self.evaluate(address.trim(), line)?;
        let value = self.evaluate(value.trim(), line)?;
        if !self.machine.write_memory(address, DEREF_SIZE, value) {
            return Err(MonitorError::MemoryWriteFailed { address, line });
        }
        Ok(String::new())
    }

    fn examine(&self, args: &str, line: usize) -> MonitorResult<String> {
        let Some((count, expr)) = args.split_once(char::is_whitespace) else {
            return Err(MonitorError::MissingArgument { command: "x".to_string(),
                                                       line });
        };
        let count = parse_count(count, line)?;
        let base = self.evaluate(expr.trim(), line)?;

        // Rows grow as memory is read; the first unmapped word ends the loop.
        let mut rows = Vec::new();
        for i in 0..count {
            let address = (i as Word).checked_mul(DEREF_SIZE as Word)
                                     .and_then(|offset| base.checked_add(offset))
                                     .ok_or(MonitorError::InvalidArgument { details:
                                                                                format!("'x {count}' runs past the end of the address space"),
                                                                            line })?;
            let value = self.machine
                            .read_memory(address, DEREF_SIZE)
                            .ok_or(MonitorError::InvalidArgument { details:
                                                                       format!("address {address:#x} is not mapped"),
                                                                   line })?;
            rows.push(format!("{address:#018x}: {value:#010x}"));
        }
        Ok(rows.join("\n"))
    }

    fn registers(&self) -> String {
        self.machine
            .registers()
            .map(|(name, value)| format!("{name:<4} {value:#018x}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn evaluate(&self, expr: &str, line: usize) -> MonitorResult<Word> {
        self.trace_tokens(expr);
        evaluate_expression_with(expr, &self.machine, &self.limits)
            .map_err(|source| MonitorError::Expr { input: expr.to_string(),
                                                   source,
                                                   line })
    }

    fn trace_tokens(&self, expr: &str) {
        if !self.trace {
            return;
        }
        if let Ok(tokens) = tokenize(expr, &self.limits) {
            for (i, token) in tokens.iter().enumerate() {
                eprintln!("token[{i}] = {token:?}");
            }
        }
    }
}

/// Runs a monitor script, one command per line.
///
/// Blank lines and lines starting with `#` are skipped. Output of each command
/// is printed when `echo` is set. The first failing command stops the script.
///
/// # Errors
/// Returns the first command's error, tagged with its line number.
///
/// # Examples
/// ```
/// use sdbexpr::monitor::{Monitor, run_script};
///
/// let script = "set $t0 5\nw $t0\nset $t0 6\nsi\nassert $t0 == 6";
/// assert!(run_script(script, &mut Monitor::default(), false).is_ok());
///
/// // `assert` fails the script.
/// assert!(run_script("assert 1 - 1", &mut Monitor::default(), false).is_err());
/// ```
pub fn run_script(source: &str, monitor: &mut Monitor, echo: bool) -> MonitorResult<()> {
    for (i, command) in source.lines().enumerate() {
        let command = command.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }

        let output = monitor.execute(command, i + 1)?;
        if echo && !output.is_empty() {
            println!("{output}");
        }
    }
    Ok(())
}

fn required<'a>(command: &str, rest: &'a str, line: usize) -> MonitorResult<&'a str> {
    if rest.is_empty() {
        return Err(MonitorError::MissingArgument { command: command.to_string(),
                                                   line });
    }
    Ok(rest)
}

fn parse_count(text: &str, line: usize) -> MonitorResult<usize> {
    text.trim().parse().map_err(|_| MonitorError::InvalidArgument { details: format!("'{text}' is not a number"),
                                                                    line })
}
