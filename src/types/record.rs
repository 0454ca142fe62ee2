//! Transaction records and identifiers
//!
//! This module defines the immutable `TransactionRecord` appended to the
//! event log for every load/authorize attempt, whether approved or denied.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::amount::Money;

/// Account identifier
///
/// Opaque string chosen by the caller; validated non-empty at the boundary.
pub type AccountId = String;

/// Globally unique transaction record identifier
///
/// Generated (v4) when the record is created and never reused.
pub type RecordId = Uuid;

/// Outcome of a load/authorize attempt
///
/// Fixed at record creation and never revised. Only `Approved` records
/// contribute to a replayed balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Approved,
    Denied,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Approved => write!(f, "APPROVED"),
            TransactionStatus::Denied => write!(f, "DENIED"),
        }
    }
}

/// Immutable audit record of one load/authorize attempt
///
/// The amount is the *requested* amount, independent of whether the attempt
/// was approved. Records are created exactly once per attempt, appended to
/// the owning account's log, and never mutated or removed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Account this record belongs to
    pub account_id: AccountId,

    /// Unique record identifier, generated at creation
    pub record_id: RecordId,

    /// The requested amount, including its polarity
    pub amount: Money,

    /// Approved or denied, fixed at creation
    pub status: TransactionStatus,

    /// Creation time; not strictly increasing across concurrent writers
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record for an attempt, stamping a fresh id and timestamp
    pub fn new(account_id: impl Into<AccountId>, amount: Money, status: TransactionStatus) -> Self {
        TransactionRecord {
            account_id: account_id.into(),
            record_id: Uuid::new_v4(),
            amount,
            status,
            recorded_at: Utc::now(),
        }
    }
}
