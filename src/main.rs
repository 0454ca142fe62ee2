//! Bank Ledger Engine CLI
//!
//! Command-line interface replaying ledger operations from a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv
//! cargo run -- --lock-wait-ms 250 operations.csv
//! ```
//!
//! The program reads operation rows (`op,account,amount`) from the input
//! file, dispatches them through the ledger engine in file order, and
//! writes one status line per completed operation to stdout. Malformed
//! rows and failed requests are logged to stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output failure, etc.)

use bank_ledger_engine::core::LedgerEngine;
use bank_ledger_engine::{cli, io};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_ledger_config();
    let engine = LedgerEngine::with_config(&config);

    // Replay the operation file; results go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = io::process_operations(&engine, &args.input_file, &mut output, args.format).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
