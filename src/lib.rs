//! Bank Ledger Engine Library
//! # Overview
//!
//! This library maintains per-account monetary balances that stay consistent
//! under concurrent mutation, alongside an independent append-only
//! transaction log that serves as an auditable, replayable source of truth.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Money, TransactionRecord, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::balance`] - Cached per-account balance with bounded-wait locking
//!   - [`core::event_log`] - Append-only audit log with balance replay
//!   - [`core::registry`] - Account registry with atomic first-touch creation
//!   - [`core::ledger`] - Orchestration of the four ledger operations
//! - [`io`] - Operation file boundary (validation, streaming reader, replay)
//!
//! # Operations
//!
//! The engine supports four operations:
//!
//! - **Load**: credit funds to an account; always APPROVED once the balance
//!   lock is acquired
//! - **Authorize**: request a debit; APPROVED when the balance actually
//!   decreased, DENIED when funds were insufficient (including the
//!   zero-amount case, where an unchanged balance classifies as a denial)
//! - **Balance**: read the cached balance, lazily materializing the account
//! - **Verify**: compare the cached balance against the balance recomputed
//!   by replaying APPROVED log records; exact decimal equality
//!
//! # Concurrency
//!
//! Every account carries its own exclusive balance lock, acquired with a
//! bounded wait (100 ms by default); a timeout surfaces as the retryable
//! [`types::LedgerError::Busy`]. Log appends are serialized per account
//! independently of the balance lock, and the registry creates each account
//! atomically on first touch.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{
    AccountBalance, AccountRegistry, AuthorizationReceipt, BalanceView, LedgerConfig,
    LedgerEngine, LoadReceipt, TransactionLog, VerificationOutcome, VerificationReport,
};
pub use io::{process_operations, LedgerRequest};
pub use types::{
    AccountId, LedgerError, Money, Polarity, RecordId, TransactionRecord, TransactionStatus,
};
