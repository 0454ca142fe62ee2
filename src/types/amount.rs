//! Monetary amount value types
//!
//! This module defines the immutable `Money` value carried by transaction
//! records and returned in operation receipts. An amount is a non-negative
//! decimal magnitude (at most two fractional digits), a currency code, and
//! a polarity describing its directional effect on a balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency code applied to every account and amount.
///
/// The engine is single-currency: the code is fixed at account creation and
/// never converted or recomputed afterwards.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Directional effect of an amount on a balance
///
/// A `Credit` increases the balance, a `Debit` decreases it. Polarity is
/// fixed when the amount is created and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    /// Increases the balance
    Credit,
    /// Decreases the balance
    Debit,
}

/// Immutable monetary amount
///
/// Pure data carrier with no behavior beyond construction. The magnitude is
/// never negative; negative values are rejected at the input boundary before
/// a `Money` is ever built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Non-negative magnitude with at most two fractional digits
    pub amount: Decimal,

    /// Currency code (always [`DEFAULT_CURRENCY`] in this core)
    pub currency: String,

    /// Whether this amount credits or debits the balance
    pub debit_or_credit: Polarity,
}

impl Money {
    /// Create a CREDIT amount in the default currency
    pub fn credit(amount: Decimal) -> Self {
        Money {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            debit_or_credit: Polarity::Credit,
        }
    }

    /// Create a DEBIT amount in the default currency
    pub fn debit(amount: Decimal) -> Self {
        Money {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            debit_or_credit: Polarity::Debit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_constructor() {
        let money = Money::credit(dec!(100.00));
        assert_eq!(money.amount, dec!(100.00));
        assert_eq!(money.currency, DEFAULT_CURRENCY);
        assert_eq!(money.debit_or_credit, Polarity::Credit);
    }

    #[test]
    fn test_debit_constructor() {
        let money = Money::debit(dec!(75.00));
        assert_eq!(money.amount, dec!(75.00));
        assert_eq!(money.debit_or_credit, Polarity::Debit);
    }
}
