//! Operation file format handling and input validation
//!
//! This module centralizes the boundary validation the core relies on:
//! account ids must be non-empty and amounts must match the accepted
//! grammar before a request ever reaches the ledger engine.
//!
//! All functions are pure (no I/O) for easy testing.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::types::{AccountId, LedgerError};

/// CSV row structure for deserialization
///
/// Matches the operation file format with columns: op, account, amount.
/// The amount column is empty for balance/verify rows.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OpCsvRecord {
    pub op: String,
    pub account: String,
    pub amount: Option<String>,
}

/// A validated ledger request ready for the engine
///
/// Amounts have already passed the boundary grammar; the core never sees a
/// negative or malformed magnitude.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRequest {
    Load {
        account_id: AccountId,
        amount: Decimal,
    },
    Authorize {
        account_id: AccountId,
        amount: Decimal,
    },
    Balance {
        account_id: AccountId,
    },
    Verify {
        account_id: AccountId,
    },
}

/// Validate an account id: non-empty after trimming
pub fn validate_account_id(raw: &str) -> Result<AccountId, LedgerError> {
    if raw.trim().is_empty() {
        return Err(LedgerError::InvalidAccountId);
    }
    Ok(raw.to_string())
}

// One or more digits, optionally a decimal point followed by one or two
// digits. No sign, no exponent, no separators.
fn matches_amount_grammar(raw: &str) -> bool {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match fraction {
        Some(fraction) => {
            (1..=2).contains(&fraction.len()) && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => true,
    }
}

/// Parse an amount string under the boundary grammar
///
/// # Errors
///
/// Returns `InvalidAmount` when the string does not match the grammar or
/// exceeds the representable range.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    if !matches_amount_grammar(raw) {
        return Err(LedgerError::invalid_amount(raw));
    }
    Decimal::from_str(raw).map_err(|_| LedgerError::invalid_amount(raw))
}

/// Convert a CSV row into a validated [`LedgerRequest`]
///
/// This function:
/// - Validates the account id is non-empty
/// - Parses the operation name (case-insensitive)
/// - Requires and validates an amount for load/authorize rows
/// - Ignores any amount supplied on balance/verify rows
pub fn convert_op_record(record: OpCsvRecord) -> Result<LedgerRequest, LedgerError> {
    let account_id = validate_account_id(&record.account)?;

    let require_amount = || -> Result<Decimal, LedgerError> {
        match record.amount.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_amount(raw),
            _ => Err(LedgerError::invalid_amount("")),
        }
    };

    match record.op.to_lowercase().as_str() {
        "load" => Ok(LedgerRequest::Load {
            account_id,
            amount: require_amount()?,
        }),
        // The original service exposed this as "authorization"
        "authorize" | "authorization" => Ok(LedgerRequest::Authorize {
            account_id,
            amount: require_amount()?,
        }),
        "balance" => Ok(LedgerRequest::Balance { account_id }),
        "verify" => Ok(LedgerRequest::Verify { account_id }),
        other => Err(LedgerError::Parse {
            message: format!("Invalid operation '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::integer("100", dec!(100))]
    #[case::one_fraction_digit("100.5", dec!(100.5))]
    #[case::two_fraction_digits("100.55", dec!(100.55))]
    #[case::zero("0", dec!(0))]
    #[case::zero_cents("0.00", dec!(0.00))]
    #[case::leading_zeros("007.10", dec!(7.10))]
    fn test_parse_amount_accepts_grammar(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::negative("-1.00")]
    #[case::explicit_plus("+1.00")]
    #[case::three_fraction_digits("1.234")]
    #[case::trailing_point("1.")]
    #[case::leading_point(".50")]
    #[case::exponent("1e5")]
    #[case::thousands_separator("1,000")]
    #[case::letters("abc")]
    #[case::embedded_space("1 0")]
    fn test_parse_amount_rejects_malformed(#[case] raw: &str) {
        assert!(matches!(
            parse_amount(raw),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[rstest]
    #[case::plain("user1")]
    #[case::with_inner_space("user one")]
    fn test_validate_account_id_accepts(#[case] raw: &str) {
        assert_eq!(validate_account_id(raw).unwrap(), raw);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn test_validate_account_id_rejects(#[case] raw: &str) {
        assert_eq!(
            validate_account_id(raw).unwrap_err(),
            LedgerError::InvalidAccountId
        );
    }

    fn row(op: &str, account: &str, amount: Option<&str>) -> OpCsvRecord {
        OpCsvRecord {
            op: op.to_string(),
            account: account.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    #[rstest]
    #[case::load(row("load", "user1", Some("100.00")), LedgerRequest::Load { account_id: "user1".to_string(), amount: dec!(100.00) })]
    #[case::authorize(row("authorize", "user1", Some("75.00")), LedgerRequest::Authorize { account_id: "user1".to_string(), amount: dec!(75.00) })]
    #[case::authorization_alias(row("authorization", "user1", Some("75.00")), LedgerRequest::Authorize { account_id: "user1".to_string(), amount: dec!(75.00) })]
    #[case::uppercase_op(row("LOAD", "user1", Some("1.00")), LedgerRequest::Load { account_id: "user1".to_string(), amount: dec!(1.00) })]
    #[case::balance(row("balance", "user2", None), LedgerRequest::Balance { account_id: "user2".to_string() })]
    #[case::verify(row("verify", "user1", None), LedgerRequest::Verify { account_id: "user1".to_string() })]
    #[case::balance_ignores_amount(row("balance", "user2", Some("9.99")), LedgerRequest::Balance { account_id: "user2".to_string() })]
    fn test_convert_op_record(#[case] record: OpCsvRecord, #[case] expected: LedgerRequest) {
        assert_eq!(convert_op_record(record).unwrap(), expected);
    }

    #[rstest]
    #[case::load_missing_amount(row("load", "user1", None))]
    #[case::load_empty_amount(row("load", "user1", Some("")))]
    #[case::authorize_bad_amount(row("authorize", "user1", Some("1.234")))]
    fn test_convert_rejects_bad_amounts(#[case] record: OpCsvRecord) {
        assert!(matches!(
            convert_op_record(record),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_convert_rejects_empty_account() {
        let record = row("load", "  ", Some("1.00"));
        assert_eq!(
            convert_op_record(record).unwrap_err(),
            LedgerError::InvalidAccountId
        );
    }

    #[test]
    fn test_convert_rejects_unknown_operation() {
        let record = row("transfer", "user1", Some("1.00"));
        assert!(matches!(
            convert_op_record(record),
            Err(LedgerError::Parse { .. })
        ));
    }
}
