//! Error types for the ledger engine
//!
//! This module defines all error types that can occur while validating and
//! processing ledger operations.
//!
//! # Error Categories
//!
//! - **Input Errors**: empty account id, malformed amount; rejected at the
//!   boundary and never reach balance/log logic.
//! - **Busy**: the bounded per-account lock wait elapsed; retryable, with no
//!   state mutated. Kept distinct from other failures all the way to the
//!   caller so it can be surfaced as a retry signal.
//! - **Arithmetic Errors**: overflow in a balance mutation; fatal for the
//!   single request only, account state unchanged.
//! - **I/O and Parse Errors**: operation file handling at the boundary.

use thiserror::Error;

use super::record::AccountId;

/// Main error type for the ledger engine
///
/// Each variant includes enough context to diagnose the failure. Note that a
/// verification discrepancy is *not* an error: it is a reported outcome (see
/// [`crate::core::ledger::VerificationOutcome`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Account id was empty or whitespace-only
    ///
    /// Rejected at the boundary; the core never sees an invalid id.
    #[error("Account ID cannot be empty")]
    InvalidAccountId,

    /// Amount did not match the accepted grammar
    ///
    /// Accepted: one or more digits, optionally followed by a decimal point
    /// and one or two digits. No sign, no exponent, no separators.
    #[error("Amount must be a non-negative number with up to two decimal places, got '{amount}'")]
    InvalidAmount {
        /// The rejected amount string
        amount: String,
    },

    /// The account's balance lock could not be acquired within the bound
    ///
    /// Retryable; no balance mutation and no record append occurred.
    #[error("Account {account} is busy, please retry")]
    Busy {
        /// Account whose lock acquisition timed out
        account: AccountId,
    },

    /// Arithmetic overflow in a balance mutation
    ///
    /// The request fails with the account state exactly as before.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    Overflow {
        /// Operation that would overflow
        operation: String,
        /// Account being mutated
        account: AccountId,
    },

    /// I/O error while reading the operation file or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the operation file
    ///
    /// Recoverable: the malformed row is skipped and processing continues.
    #[error("CSV parse error: {message}")]
    Parse {
        /// Description of the parsing error
        message: String,
    },
}

impl LedgerError {
    /// Create a Busy error
    pub fn busy(account: &str) -> Self {
        LedgerError::Busy {
            account: account.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: &str, account: &str) -> Self {
        LedgerError::Overflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Whether the caller should retry the whole operation
    ///
    /// Only `Busy` is retryable; every other failure is a rejection.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Busy { .. })
    }
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv_async::Error to LedgerError
impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        LedgerError::Parse {
            message: error.to_string(),
        }
    }
}
