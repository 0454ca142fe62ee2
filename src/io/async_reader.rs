//! Asynchronous operation file reader
//!
//! Provides a streaming interface over ledger operation rows from a CSV
//! file. Malformed rows are logged and skipped so one bad row never aborts
//! a replay.
//!
//! # Design
//!
//! The OperationReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio for the async runtime
//! - the `op_format` module for row validation and conversion

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use log::warn;

use crate::io::op_format::{convert_op_record, LedgerRequest, OpCsvRecord};

/// Asynchronous CSV reader over ledger operation rows
pub struct OperationReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> OperationReader<R> {
    /// Create a new OperationReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read and validate all operation rows
    ///
    /// Rows that fail CSV parsing or boundary validation are logged and
    /// skipped; the remaining requests are returned in file order.
    pub async fn read_requests(&mut self) -> Vec<LedgerRequest> {
        let mut requests = Vec::new();
        let mut rows = self.csv_reader.deserialize::<OpCsvRecord>();

        while let Some(row) = rows.next().await {
            match row {
                Ok(record) => match convert_op_record(record) {
                    Ok(request) => requests.push(request),
                    Err(e) => warn!("Skipping invalid operation row: {e}"),
                },
                Err(e) => warn!("CSV parse error: {e}"),
            }
        }

        requests
    }
}
