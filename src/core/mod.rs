//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `balance` - Cached per-account balance with bounded-wait locking
//! - `event_log` - Append-only audit log with balance replay
//! - `registry` - Process-wide account registry with atomic first-touch
//! - `ledger` - Orchestration of the load/authorize/balance/verify operations
//! - `config` - Engine configuration

pub mod balance;
pub mod config;
pub mod event_log;
pub mod ledger;
pub mod registry;

pub use balance::{AccountBalance, Subtraction, DEFAULT_LOCK_WAIT};
pub use config::LedgerConfig;
pub use event_log::TransactionLog;
pub use ledger::{
    AuthorizationReceipt, BalanceView, LedgerEngine, LoadReceipt, VerificationOutcome,
    VerificationReport,
};
pub use registry::AccountRegistry;
