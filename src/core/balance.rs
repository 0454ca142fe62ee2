//! Cached per-account balance with bounded-wait mutual exclusion
//!
//! This module provides the `AccountBalance` aggregate: a mutable cached
//! magnitude protected by an exclusive lock that is only ever acquired with
//! a bounded wait. A caller that cannot take the lock within the bound gets
//! a retryable [`LedgerError::Busy`] instead of blocking indefinitely.
//!
//! # Design
//!
//! The lock is a `tokio::sync::Mutex` wrapped in `tokio::time::timeout`.
//! Each account carries its own lock; locks of distinct accounts are fully
//! independent and there is no global serialization point.
//!
//! Insufficient funds are not an error at this layer: `subtract` reports the
//! balance it observed before and after the attempt, and the caller decides
//! what an unchanged balance means.

use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::types::{AccountId, LedgerError, DEFAULT_CURRENCY};

/// Default bounded wait for acquiring an account's balance lock.
pub const DEFAULT_LOCK_WAIT: Duration = Duration::from_millis(100);

/// Before/after view of one subtract attempt
///
/// Both values are captured inside the same critical section, so comparing
/// them classifies the attempt exactly: `after < before` means the
/// subtraction was applied, `after == before` means it was rejected (or was
/// a zero-amount no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtraction {
    /// Magnitude observed on entry to the critical section
    pub before: Decimal,
    /// Magnitude on exit; equals `before` when nothing was subtracted
    pub after: Decimal,
}

impl Subtraction {
    /// Whether the subtraction actually lowered the balance
    pub fn applied(&self) -> bool {
        self.after < self.before
    }
}

/// Mutable per-account balance aggregate
///
/// Owns the cached magnitude and the fixed currency for one account. All
/// mutation goes through `add`/`subtract` under the bounded-wait lock; the
/// magnitude never goes negative because an insufficient subtract is a
/// no-op.
#[derive(Debug)]
pub struct AccountBalance {
    /// Account this balance belongs to, kept for error context
    account: AccountId,

    /// Cached magnitude, guarded by the exclusive per-account lock
    magnitude: Mutex<Decimal>,

    /// Currency code, fixed at creation
    currency: String,

    /// Bounded wait applied to every lock acquisition
    lock_wait: Duration,
}

impl AccountBalance {
    /// Create a zero balance in the default currency
    pub fn new(account: AccountId, lock_wait: Duration) -> Self {
        AccountBalance {
            account,
            magnitude: Mutex::new(Decimal::ZERO),
            currency: DEFAULT_CURRENCY.to_string(),
            lock_wait,
        }
    }

    /// Add `amount` to the cached magnitude
    ///
    /// Acquires the exclusive lock within the bounded wait. On success the
    /// new magnitude is returned. On timeout the balance is unchanged and
    /// [`LedgerError::Busy`] is returned.
    ///
    /// # Errors
    ///
    /// * `Busy` - the lock could not be acquired within the bound
    /// * `Overflow` - the addition would overflow; balance unchanged
    pub async fn add(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let mut guard = timeout(self.lock_wait, self.magnitude.lock())
            .await
            .map_err(|_| LedgerError::busy(&self.account))?;

        let updated = guard
            .checked_add(amount)
            .ok_or_else(|| LedgerError::overflow("add", &self.account))?;
        *guard = updated;
        Ok(updated)
    }

    /// Subtract `amount` from the cached magnitude if funds suffice
    ///
    /// Acquires the exclusive lock within the bounded wait. If the current
    /// magnitude is at least `amount` it is lowered; otherwise nothing is
    /// mutated. Either way the returned [`Subtraction`] carries the
    /// magnitudes observed before and after the attempt, captured under the
    /// lock.
    ///
    /// # Errors
    ///
    /// * `Busy` - the lock could not be acquired within the bound
    pub async fn subtract(&self, amount: Decimal) -> Result<Subtraction, LedgerError> {
        let mut guard = timeout(self.lock_wait, self.magnitude.lock())
            .await
            .map_err(|_| LedgerError::busy(&self.account))?;

        let before = *guard;
        if before >= amount {
            *guard = before - amount;
        }
        Ok(Subtraction {
            before,
            after: *guard,
        })
    }

    /// Point-in-time snapshot of the cached magnitude
    ///
    /// Does not participate in the bounded-wait protocol; the value may be
    /// stale by the time the caller uses it if a concurrent add/subtract
    /// lands after the read.
    pub async fn magnitude(&self) -> Decimal {
        *self.magnitude.lock().await
    }

    /// Currency code fixed at account creation
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn balance() -> AccountBalance {
        AccountBalance::new("user1".to_string(), DEFAULT_LOCK_WAIT)
    }

    #[tokio::test]
    async fn test_add_returns_new_magnitude() {
        let balance = balance();
        assert_eq!(balance.add(dec!(100.00)).await.unwrap(), dec!(100.00));
        assert_eq!(balance.add(dec!(0.50)).await.unwrap(), dec!(100.50));
        assert_eq!(balance.magnitude().await, dec!(100.50));
    }

    #[tokio::test]
    async fn test_subtract_with_sufficient_funds() {
        let balance = balance();
        balance.add(dec!(100.00)).await.unwrap();

        let outcome = balance.subtract(dec!(75.00)).await.unwrap();
        assert!(outcome.applied());
        assert_eq!(outcome.before, dec!(100.00));
        assert_eq!(outcome.after, dec!(25.00));
        assert_eq!(balance.magnitude().await, dec!(25.00));
    }

    #[tokio::test]
    async fn test_subtract_with_insufficient_funds_is_a_noop() {
        let balance = balance();
        balance.add(dec!(25.00)).await.unwrap();

        let outcome = balance.subtract(dec!(75.00)).await.unwrap();
        assert!(!outcome.applied());
        assert_eq!(outcome.before, dec!(25.00));
        assert_eq!(outcome.after, dec!(25.00));
        assert_eq!(balance.magnitude().await, dec!(25.00));
    }

    #[tokio::test]
    async fn test_subtract_exact_balance_reaches_zero() {
        let balance = balance();
        balance.add(dec!(20.00)).await.unwrap();

        let outcome = balance.subtract(dec!(20.00)).await.unwrap();
        assert!(outcome.applied());
        assert_eq!(outcome.after, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_subtract_zero_amount_is_unchanged() {
        let balance = balance();
        balance.add(dec!(10.00)).await.unwrap();

        let outcome = balance.subtract(Decimal::ZERO).await.unwrap();
        assert!(!outcome.applied());
        assert_eq!(outcome.before, outcome.after);
    }

    #[tokio::test]
    async fn test_add_times_out_when_lock_is_held() {
        let balance = AccountBalance::new("user1".to_string(), Duration::from_millis(10));
        let _guard = balance.magnitude.lock().await;

        let result = balance.add(dec!(1.00)).await;
        assert!(matches!(result, Err(LedgerError::Busy { .. })));
    }

    #[tokio::test]
    async fn test_subtract_times_out_when_lock_is_held() {
        let balance = AccountBalance::new("user1".to_string(), Duration::from_millis(10));
        let _guard = balance.magnitude.lock().await;

        let result = balance.subtract(dec!(1.00)).await;
        assert_eq!(result.unwrap_err(), LedgerError::busy("user1"));
    }

    #[tokio::test]
    async fn test_add_overflow_leaves_balance_unchanged() {
        let balance = balance();
        balance.add(Decimal::MAX).await.unwrap();

        let result = balance.add(Decimal::MAX).await;
        assert!(matches!(result, Err(LedgerError::Overflow { .. })));
        assert_eq!(balance.magnitude().await, Decimal::MAX);
    }

    #[tokio::test]
    async fn test_currency_is_fixed() {
        let balance = balance();
        assert_eq!(balance.currency(), "USD");
    }
}
