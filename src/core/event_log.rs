//! Append-only transaction log with balance replay
//!
//! This module provides the `TransactionLog`: per-account, append-only
//! sequences of [`TransactionRecord`]s in attempt order. The log is the
//! auditable source of truth and can independently recompute a balance by
//! replaying only APPROVED records.
//!
//! # Thread Safety
//!
//! Records are keyed by account id in a `DashMap`. Appends to the same
//! account go through the map's entry lock, so concurrent writers cannot
//! lose or interleave entries. This discipline is independent of, and never
//! nested with, the balance lock in [`crate::core::balance`]: audit logging
//! does not serialize against balance mutation.

use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::types::{AccountId, Polarity, TransactionRecord, TransactionStatus};

/// Append-only per-account record sequences
///
/// The log is the sole owner of records; balances never reference them.
/// Consistency between the log and the cached balances is checked only by
/// the verify operation, not enforced structurally.
#[derive(Debug, Default)]
pub struct TransactionLog {
    /// Records per account, in append (attempt) order
    records: DashMap<AccountId, Vec<TransactionRecord>>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its account's sequence
    ///
    /// Always succeeds; no business validation happens at this layer. The
    /// append is serialized per account by the entry lock.
    pub fn append(&self, record: TransactionRecord) {
        self.records
            .entry(record.account_id.clone())
            .or_default()
            .push(record);
    }

    /// Snapshot of an account's records in append order
    ///
    /// Empty if the account has never transacted. The snapshot is a
    /// consistent prefix of the append order; later appends are not
    /// reflected in it.
    pub fn records_for(&self, account_id: &str) -> Vec<TransactionRecord> {
        self.records
            .get(account_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Recompute an account's balance by replaying its APPROVED records
    ///
    /// Credits add, debits subtract, starting from zero. DENIED records are
    /// skipped. Pure with respect to the balance lock: only the log is read.
    pub fn replay_balance(&self, account_id: &str) -> Decimal {
        self.records_for(account_id)
            .iter()
            .filter(|record| record.status == TransactionStatus::Approved)
            .fold(Decimal::ZERO, |balance, record| {
                match record.amount.debit_or_credit {
                    Polarity::Credit => balance + record.amount.amount,
                    Polarity::Debit => balance - record.amount.amount,
                }
            })
    }
}
