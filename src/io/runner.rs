//! Operation file replay
//!
//! Drives the ledger engine from an operation CSV file, writing one result
//! line per completed operation, either as a human-readable status line or
//! as a JSON object. Request failures (busy accounts, invalid input that
//! slipped past row validation) are logged and skipped so the replay always
//! reaches the end of the file.

use clap::ValueEnum;
use log::warn;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

use crate::core::LedgerEngine;
use crate::io::async_reader::OperationReader;
use crate::io::op_format::LedgerRequest;
use crate::types::LedgerError;

/// Output format for operation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines
    Text,
    /// One JSON object per line
    Json,
}

fn write_result<W, T>(output: &mut W, format: OutputFormat, value: &T) -> Result<(), LedgerError>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        OutputFormat::Text => writeln!(output, "{value}")?,
        OutputFormat::Json => {
            let json = serde_json::to_string(value).map_err(|e| LedgerError::Io {
                message: e.to_string(),
            })?;
            writeln!(output, "{json}")?;
        }
    }
    Ok(())
}

/// Replay an operation file through the engine
///
/// Opens `input`, validates and converts its rows, and dispatches each
/// resulting request in file order. Each completed operation writes its
/// result to `output` in the requested format.
///
/// # Errors
///
/// Returns an error only for I/O failures on the input file or the output
/// writer; per-request failures are logged and do not abort the replay.
pub async fn process_operations<W: Write>(
    engine: &LedgerEngine,
    input: &Path,
    output: &mut W,
    format: OutputFormat,
) -> Result<(), LedgerError> {
    let file = tokio::fs::File::open(input).await?;
    let mut reader = OperationReader::new(file.compat());
    let requests = reader.read_requests().await;

    for request in requests {
        match request {
            LedgerRequest::Load { account_id, amount } => {
                match engine.load(&account_id, amount).await {
                    Ok(receipt) => write_result(output, format, &receipt)?,
                    Err(e) => warn!("load {account_id} failed: {e}"),
                }
            }
            LedgerRequest::Authorize { account_id, amount } => {
                match engine.authorize(&account_id, amount).await {
                    Ok(receipt) => write_result(output, format, &receipt)?,
                    Err(e) => warn!("authorize {account_id} failed: {e}"),
                }
            }
            LedgerRequest::Balance { account_id } => {
                let view = engine.balance(&account_id).await;
                write_result(output, format, &view)?;
            }
            LedgerRequest::Verify { account_id } => {
                let report = engine.verify(&account_id).await;
                write_result(output, format, &report)?;
            }
        }
    }

    Ok(())
}
