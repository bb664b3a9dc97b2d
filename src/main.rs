//! Split Engine CLI
//!
//! Reads a transaction CSV, splits every transaction evenly among the
//! roster, and outputs per-participant totals.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > totals.csv
//! cargo run -- transactions.csv Alice Bob > totals.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use split_engine::{EngineError, Result, SplitEngine};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let input_path = args.next().ok_or(EngineError::MissingArgument)?;
    let names: Vec<String> = args.collect();

    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let mut engine = if names.is_empty() {
        SplitEngine::new()
    } else {
        SplitEngine::with_roster(names)
    };
    engine.load_csv(reader)?;

    // Everyone shares every transaction; per-row choices need a UI.
    for index in 0..engine.participants().len() {
        engine.set_all_for_participant(index, true)?;
    }

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_totals(handle)?;

    Ok(())
}
