//! I/O module
//!
//! Handles the operation file boundary: row parsing, input validation, and
//! replaying a file through the engine.
//!
//! # Components
//!
//! - `op_format` - operation row format, amount grammar, request conversion
//! - `async_reader` - streaming CSV reader over operation rows
//! - `runner` - file replay driving the ledger engine

pub mod async_reader;
pub mod op_format;
pub mod runner;

pub use async_reader::OperationReader;
pub use op_format::{convert_op_record, parse_amount, validate_account_id, LedgerRequest};
pub use runner::{process_operations, OutputFormat};
