//! Process-wide account registry
//!
//! This module provides the `AccountRegistry`, mapping account ids to their
//! [`AccountBalance`] aggregates. The registry is constructed explicitly at
//! startup and injected into the ledger engine; there is no global mutable
//! state.
//!
//! # Thread Safety
//!
//! Backed by `DashMap`, whose entry API gives atomic insert-if-absent: two
//! concurrent first-touches of the same new account id observe a single
//! `AccountBalance` instance, never two divergent ones.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

use super::balance::AccountBalance;
use crate::types::AccountId;

/// Registry of one `AccountBalance` per account id
///
/// Accounts are materialized lazily on first reference, live for the
/// process lifetime, and are never deleted.
#[derive(Debug)]
pub struct AccountRegistry {
    /// Concurrent map of account id to its balance aggregate
    accounts: DashMap<AccountId, Arc<AccountBalance>>,

    /// Bounded lock wait handed to every balance this registry creates
    lock_wait: Duration,
}

impl AccountRegistry {
    /// Create an empty registry whose balances use the given lock wait
    pub fn new(lock_wait: Duration) -> Self {
        AccountRegistry {
            accounts: DashMap::new(),
            lock_wait,
        }
    }

    /// Resolve the balance for an account, creating it if absent
    ///
    /// Creation happens at most once per account id even under concurrent
    /// first-touches. Resolving an account purely to read it is intentional
    /// lazy materialization, not an error.
    pub fn resolve(&self, account_id: &str) -> Arc<AccountBalance> {
        self.accounts
            .entry(account_id.to_string())
            .or_insert_with(|| {
                log::debug!("Materializing account {account_id}");
                Arc::new(AccountBalance::new(account_id.to_string(), self.lock_wait))
            })
            .clone()
    }

    /// Number of materialized accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been materialized yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
