//! GPC statement CLI
//!
//! Parses a GPC account statement and prints its transactions as CSV,
//! or a human-readable summary with `--summary`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- statement.gpc > transactions.csv
//! cargo run -- statement.gpc --summary
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use abo_gpc::{AboError, Result, Statement};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let summary = args.iter().any(|a| a == "--summary");
    let input_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .ok_or(AboError::MissingArgument)?;

    let file = File::open(input_path)?;
    let statement = Statement::from_reader(file)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if summary {
        write!(handle, "{}", statement)?;
        handle.flush()?;
    } else {
        statement.write_csv(handle)?;
    }

    Ok(())
}
