use std::fs;

use clap::Parser;
use sdbexpr::{
    interpreter::limits::{Limits, MAX_NAME_LEN, MAX_TOKENS, MAX_TOKENS_CEILING, POOL_CAPACITY},
    machine::sim::DEFAULT_MEMORY_SIZE,
    monitor::{Monitor, run_script},
};

/// sdbexpr runs debugger monitor scripts: expressions over registers and
/// memory, and watchpoints that stop stepping when a value changes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sdbexpr to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Echo every lexed token to stderr.
    #[arg(short, long)]
    trace: bool,

    /// Maximum number of tokens in one expression, at most 256.
    #[arg(long, default_value_t = MAX_TOKENS, value_parser = parse_max_tokens)]
    max_tokens: usize,

    /// Maximum length of a register name.
    #[arg(long, default_value_t = MAX_NAME_LEN)]
    max_name_len: usize,

    /// Number of watchpoint slots.
    #[arg(long, default_value_t = POOL_CAPACITY)]
    watchpoints: usize,

    /// Size of the simulated memory in bytes.
    #[arg(long, default_value_t = DEFAULT_MEMORY_SIZE)]
    memory_size: usize,

    contents: String,
}

fn parse_max_tokens(text: &str) -> Result<usize, String> {
    let value: usize = text.parse().map_err(|_| format!("'{text}' is not a number"))?;
    if value == 0 || value > MAX_TOKENS_CEILING {
        return Err(format!("must be between 1 and {MAX_TOKENS_CEILING}"));
    }
    Ok(value)
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let limits = Limits { max_tokens:    args.max_tokens,
                          max_name_len:  args.max_name_len,
                          pool_capacity: args.watchpoints, };
    let mut monitor = Monitor::new(limits, args.memory_size).with_trace(args.trace);

    if let Err(e) = run_script(&script, &mut monitor, true) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
