//! Transfer request types

use super::error::InputError;
use crate::input::RawTransfer;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Validated account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountNumber(i64);

impl AccountNumber {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully validated transfer order: move `amount` from the debit account to
/// the credit account.
///
/// Amounts are decimal, never floats.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub amount: Decimal,
    pub debit_account: AccountNumber,
    pub credit_account: AccountNumber,
}

impl TransferRequest {
    /// Parse raw console fields. Fails before any storage access.
    pub fn parse(raw: &RawTransfer) -> Result<Self, InputError> {
        let amount = Decimal::from_str(raw.amount.trim())
            .map_err(|_| InputError::AmountNotNumeric(raw.amount.clone()))?;

        if amount <= Decimal::ZERO {
            return Err(InputError::AmountNotPositive);
        }

        let debit_account = parse_account("debit", &raw.debit_account)?;
        let credit_account = parse_account("credit", &raw.credit_account)?;

        Ok(Self {
            amount,
            debit_account,
            credit_account,
        })
    }
}

fn parse_account(field: &'static str, value: &str) -> Result<AccountNumber, InputError> {
    value
        .trim()
        .parse::<i64>()
        .map(AccountNumber)
        .map_err(|_| InputError::AccountNotNumeric {
            field,
            got: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: &str, debit: &str, credit: &str) -> RawTransfer {
        RawTransfer {
            amount: amount.to_string(),
            debit_account: debit.to_string(),
            credit_account: credit.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_request() {
        let request = TransferRequest::parse(&raw(" 100.50 ", "1001", " 1002 ")).unwrap();
        assert_eq!(request.amount, Decimal::new(10050, 2));
        assert_eq!(request.debit_account.get(), 1001);
        assert_eq!(request.credit_account.get(), 1002);
    }

    #[test]
    fn test_parse_non_numeric_amount() {
        let err = TransferRequest::parse(&raw("lots", "1001", "1002")).unwrap_err();
        assert_eq!(err, InputError::AmountNotNumeric("lots".to_string()));
    }

    #[test]
    fn test_parse_zero_and_negative_amounts() {
        let err = TransferRequest::parse(&raw("0", "1001", "1002")).unwrap_err();
        assert_eq!(err, InputError::AmountNotPositive);

        let err = TransferRequest::parse(&raw("-25", "1001", "1002")).unwrap_err();
        assert_eq!(err, InputError::AmountNotPositive);
    }

    #[test]
    fn test_parse_non_numeric_accounts() {
        let err = TransferRequest::parse(&raw("50", "abc", "1002")).unwrap_err();
        assert!(matches!(err, InputError::AccountNotNumeric { field: "debit", .. }));

        let err = TransferRequest::parse(&raw("50", "1001", "")).unwrap_err();
        assert!(matches!(err, InputError::AccountNotNumeric { field: "credit", .. }));
    }
}
