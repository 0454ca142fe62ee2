//! Ledger operation orchestration
//!
//! This module provides the `LedgerEngine`, which combines the account
//! registry (cached balances) and the transaction log (audit trail) to
//! implement the four ledger operations: load, authorize, balance query,
//! and verify.
//!
//! # Architecture
//!
//! ```text
//! LedgerEngine
//!     ├── Arc<AccountRegistry> (account id -> bounded-lock AccountBalance)
//!     └── Arc<TransactionLog>  (account id -> append-only audit records)
//! ```
//!
//! The two structures are independent siblings. Load and authorize mutate
//! the balance first and append the audit record second; verify is the
//! consistency oracle that replays the log and compares it against the
//! cached balance with exact decimal equality.
//!
//! # Thread Safety
//!
//! The engine is cheap to clone and safe to share across tasks. Balance
//! mutation is serialized per account by the bounded-wait lock; log appends
//! are serialized per account by the log's own discipline; neither lock is
//! ever held while taking the other.

use log::{info, warn};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::config::LedgerConfig;
use super::event_log::TransactionLog;
use super::registry::AccountRegistry;
use crate::types::{
    AccountId, LedgerError, Money, RecordId, TransactionRecord, TransactionStatus,
};

/// Result of a successful load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReceipt {
    /// Account that was credited
    pub account_id: AccountId,
    /// Identifier of the APPROVED CREDIT record this load appended
    pub record_id: RecordId,
    /// Post-load balance, expressed as a CREDIT amount
    pub balance: Money,
}

impl fmt::Display for LoadReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LOAD: ACCOUNT {}, BALANCE = {}",
            self.account_id, self.balance.amount
        )
    }
}

/// Result of an authorize attempt, approved or denied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationReceipt {
    /// Account the debit was requested against
    pub account_id: AccountId,
    /// Identifier of the DEBIT record this attempt appended
    pub record_id: RecordId,
    /// APPROVED or DENIED
    pub response_code: TransactionStatus,
    /// Resulting balance as a DEBIT amount; unchanged when denied
    pub balance: Money,
}

impl fmt::Display for AuthorizationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AUTHORIZATION {}: ACCOUNT {}, BALANCE = {}",
            self.response_code, self.account_id, self.balance.amount
        )
    }
}

/// Current cached balance of an account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    pub account_id: AccountId,
    pub balance: Decimal,
    pub currency: String,
}

impl fmt::Display for BalanceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CHECK BALANCE: ACCOUNT {}, BALANCE = {}",
            self.account_id, self.balance
        )
    }
}

/// Outcome of comparing the cached balance against the replayed log
///
/// A discrepancy is a reported outcome, not an error; it carries the
/// replayed value so both sides are available for diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "message")]
pub enum VerificationOutcome {
    #[serde(rename = "Balances match")]
    Match,
    #[serde(rename = "Balance discrepancy detected")]
    #[serde(rename_all = "camelCase")]
    Discrepancy {
        /// Balance recomputed by replaying APPROVED records
        replayed_balance: Decimal,
    },
}

/// Result of a verify operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub account_id: AccountId,
    /// Cached balance at the time of the check
    pub cached_balance: Decimal,
    #[serde(flatten)]
    pub outcome: VerificationOutcome,
}

impl VerificationReport {
    /// Whether the cached and replayed balances agreed
    pub fn is_match(&self) -> bool {
        self.outcome == VerificationOutcome::Match
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            VerificationOutcome::Match => write!(
                f,
                "VERIFY: ACCOUNT {}, BALANCE = {}, balances match",
                self.account_id, self.cached_balance
            ),
            VerificationOutcome::Discrepancy { replayed_balance } => write!(
                f,
                "VERIFY: ACCOUNT {}, CACHED = {}, REPLAYED = {}, balance discrepancy detected",
                self.account_id, self.cached_balance, replayed_balance
            ),
        }
    }
}

/// Orchestrator for the four ledger operations
///
/// Combines the injected registry and log; resolves (creating if absent)
/// the account's aggregates per request and applies the decision protocol.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    /// Cached balances, one bounded-lock aggregate per account
    registry: Arc<AccountRegistry>,

    /// Append-only audit log, one sequence per account
    log: Arc<TransactionLog>,
}

impl LedgerEngine {
    /// Create an engine over an explicitly constructed registry and log
    pub fn new(registry: Arc<AccountRegistry>, log: Arc<TransactionLog>) -> Self {
        LedgerEngine { registry, log }
    }

    /// Create an engine with fresh aggregates from a configuration
    pub fn with_config(config: &LedgerConfig) -> Self {
        Self::new(
            Arc::new(AccountRegistry::new(config.lock_wait)),
            Arc::new(TransactionLog::new()),
        )
    }

    /// Credit `amount` to an account
    ///
    /// Resolves (creating if absent) the account's balance, adds under the
    /// bounded-wait lock, then appends an APPROVED CREDIT record for the
    /// requested amount.
    ///
    /// # Errors
    ///
    /// * `Busy` - the lock wait elapsed; nothing mutated, no record appended
    /// * `Overflow` - the credit would overflow; nothing mutated, no record
    pub async fn load(&self, account_id: &str, amount: Decimal) -> Result<LoadReceipt, LedgerError> {
        let balance = self.registry.resolve(account_id);
        let updated = balance.add(amount).await.inspect_err(|e| {
            warn!("LOAD rejected for account {account_id}: {e}");
        })?;

        let record = TransactionRecord::new(
            account_id,
            Money::credit(amount),
            TransactionStatus::Approved,
        );
        let record_id = record.record_id;
        self.log.append(record);

        let receipt = LoadReceipt {
            account_id: account_id.to_string(),
            record_id,
            balance: Money::credit(updated),
        };
        info!("{receipt}");
        Ok(receipt)
    }

    /// Request a debit authorization against an account
    ///
    /// Resolves (creating if absent) the account's balance and attempts the
    /// subtraction under the bounded-wait lock. The decision rule compares
    /// the magnitudes before and after the attempt: a lowered balance is
    /// APPROVED, an unchanged one is DENIED. Both magnitudes come from the
    /// subtract critical section, so two concurrent authorizes against one
    /// payment's worth of funds yield exactly one approval.
    ///
    /// A zero-amount authorize leaves the balance unchanged and is therefore
    /// classified DENIED.
    ///
    /// Every decided attempt appends exactly one DEBIT record carrying the
    /// requested amount and the decision.
    ///
    /// # Errors
    ///
    /// * `Busy` - the lock wait elapsed; nothing mutated, no record appended
    pub async fn authorize(
        &self,
        account_id: &str,
        amount: Decimal,
    ) -> Result<AuthorizationReceipt, LedgerError> {
        let balance = self.registry.resolve(account_id);
        let subtraction = balance.subtract(amount).await.inspect_err(|e| {
            warn!("AUTHORIZATION rejected for account {account_id}: {e}");
        })?;

        let (response_code, resulting) = if subtraction.after < subtraction.before {
            (TransactionStatus::Approved, subtraction.after)
        } else {
            (TransactionStatus::Denied, subtraction.before)
        };

        let record =
            TransactionRecord::new(account_id, Money::debit(amount), response_code);
        let record_id = record.record_id;
        self.log.append(record);

        let receipt = AuthorizationReceipt {
            account_id: account_id.to_string(),
            record_id,
            response_code,
            balance: Money::debit(resulting),
        };
        match response_code {
            TransactionStatus::Approved => info!("{receipt}"),
            TransactionStatus::Denied => warn!("{receipt}"),
        }
        Ok(receipt)
    }

    /// Read the current cached balance of an account
    ///
    /// Creating an account purely by querying it is intentional lazy
    /// materialization.
    pub async fn balance(&self, account_id: &str) -> BalanceView {
        let balance = self.registry.resolve(account_id);
        let view = BalanceView {
            account_id: account_id.to_string(),
            balance: balance.magnitude().await,
            currency: balance.currency().to_string(),
        };
        info!("{view}");
        view
    }

    /// Compare the cached balance against the log-replayed balance
    ///
    /// The comparison uses exact decimal equality. A discrepancy is
    /// reported with both values, never raised as an error.
    pub async fn verify(&self, account_id: &str) -> VerificationReport {
        let balance = self.registry.resolve(account_id);
        let cached = balance.magnitude().await;
        let replayed = self.log.replay_balance(account_id);

        let outcome = if cached == replayed {
            VerificationOutcome::Match
        } else {
            VerificationOutcome::Discrepancy {
                replayed_balance: replayed,
            }
        };
        let report = VerificationReport {
            account_id: account_id.to_string(),
            cached_balance: cached,
            outcome,
        };
        if report.is_match() {
            info!("{report}");
        } else {
            warn!("{report}");
        }
        report
    }

    /// Snapshot of an account's audit records in attempt order
    pub fn records_for(&self, account_id: &str) -> Vec<TransactionRecord> {
        self.log.records_for(account_id)
    }
}
