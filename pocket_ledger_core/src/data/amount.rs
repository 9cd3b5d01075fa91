use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The most integer digits an amount may carry.
pub const MAX_INTEGER_DIGITS: u32 = 7;

/// The most fractional digits an amount may carry.
pub const MAX_FRACTIONAL_DIGITS: u32 = 2;

/// A strictly positive, currency-agnostic monetary magnitude with at most
/// two fractional digits and at most seven integer digits.
///
/// [`Amount::new`] is the only way to obtain one, so every amount in memory
/// satisfies the invariants. Deserialization funnels through the same check,
/// which means a stored blob carrying an out-of-range amount fails to decode
/// instead of entering the collection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Copy, Clone)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// An amount invariant violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must be strictly positive")]
    NotPositive,
    #[error("amount must have at most {} fractional digits", MAX_FRACTIONAL_DIGITS)]
    TooManyFractionalDigits,
    #[error("amount must have at most {} integer digits", MAX_INTEGER_DIGITS)]
    TooManyIntegerDigits,
}

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        // trailing zeros don't count against the fractional budget: 12.500
        // is the same magnitude as 12.50
        if value.normalize().scale() > MAX_FRACTIONAL_DIGITS {
            return Err(AmountError::TooManyFractionalDigits);
        }
        if value >= Decimal::from(10_000_000) {
            return Err(AmountError::TooManyIntegerDigits);
        }
        Ok(Amount(value))
    }

    /// The underlying decimal magnitude.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_valid_magnitudes() {
        assert!(Amount::new(dec("0.01")).is_ok());
        assert!(Amount::new(dec("12.50")).is_ok());
        assert!(Amount::new(dec("9999999.99")).is_ok());
        // three stored digits, but numerically only one fractional digit
        assert!(Amount::new(dec("12.500")).is_ok());
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(Amount::new(dec("0")), Err(AmountError::NotPositive));
        assert_eq!(Amount::new(dec("0.00")), Err(AmountError::NotPositive));
        assert_eq!(Amount::new(dec("-12.50")), Err(AmountError::NotPositive));
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        assert_eq!(Amount::new(dec("1.005")), Err(AmountError::TooManyFractionalDigits));
    }

    #[test]
    fn rejects_excess_integer_digits() {
        assert_eq!(Amount::new(dec("10000000")), Err(AmountError::TooManyIntegerDigits));
        assert_eq!(Amount::new(dec("10000000.00")), Err(AmountError::TooManyIntegerDigits));
    }

    #[test]
    fn deserialization_enforces_the_invariants() {
        let amount: Amount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(amount.value(), dec("12.50"));

        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"1.005\"").is_err());
    }
}
