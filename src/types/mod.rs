//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: Monetary amount value types (magnitude, currency, polarity)
//! - `record`: Transaction records and identifiers
//! - `error`: Error types for the ledger engine

pub mod amount;
pub mod error;
pub mod record;

pub use amount::{Money, Polarity, DEFAULT_CURRENCY};
pub use error::LedgerError;
pub use record::{AccountId, RecordId, TransactionRecord, TransactionStatus};
