//! Fixed two-decimal monetary amount.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Constraint, ValidationError};

/// Field name reported when a money value is rejected on its own.
///
/// Records relabel it with [`ValidationError::for_field`].
const FIELD: &str = "amount";

/// Money amount stored as integer cents so it always carries exactly two
/// decimal places.
///
/// On the wire it is a string such as `"25.98"`. Parsing goes through
/// [`Decimal`] and accepts a decimal string or a JSON number read at full
/// precision. A scale above two (`12.999`, `12.990`) is rejected instead of
/// rounded, whichever form it arrives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = 10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-unit portion.
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> u64 {
        self.cents.unsigned_abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiplies by a quantity, or `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Adds another amount, or `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{}.{:02}",
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl TryFrom<Decimal> for Money {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.scale() > 2 {
            return Err(ValidationError::new(
                FIELD,
                Constraint::DecimalPlaces {
                    value: value.to_string(),
                },
            ));
        }
        value
            .mantissa()
            .checked_mul(10_i128.pow(2 - value.scale()))
            .and_then(|cents| i64::try_from(cents).ok())
            .map(Money::from_cents)
            .ok_or_else(|| {
                ValidationError::new(
                    FIELD,
                    Constraint::Overflow {
                        value: value.to_string(),
                    },
                )
            })
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|_| {
            ValidationError::new(
                FIELD,
                Constraint::DecimalPlaces {
                    value: s.to_string(),
                },
            )
        })?;
        Money::try_from(decimal)
    }
}

impl TryFrom<f64> for Money {
    type Error = ValidationError;

    /// Converts a float using its shortest round-trip representation, so
    /// `12.99` is accepted while `12.999` is rejected. Amounts beyond 2^53
    /// cents cannot be represented exactly by `f64`; parse those from a
    /// string instead.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValidationError::new(FIELD, Constraint::NotFinite));
        }
        value.to_string().parse()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount with at most 2 fractional digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::try_from(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Money::try_from(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Money::try_from(Decimal::from(v)).map_err(E::custom)
    }

    /// serde_json hands over arbitrary-precision numbers as a map holding
    /// the literal digits; `Decimal` knows how to read it.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Money, A::Error> {
        let decimal = <Decimal as Deserialize>::deserialize(MapAccessDeserializer::new(map))?;
        Money::try_from(decimal).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "12.34");
        assert_eq!(Money::from_cents(100).to_string(), "1.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-12.34");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_display_at_i64_limits() {
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-92233720368547758.08"
        );
        assert_eq!(
            Money::from_cents(i64::MAX).to_string(),
            "92233720368547758.07"
        );
        let json = serde_json::to_string(&Money::from_cents(i64::MIN)).unwrap();
        assert_eq!(json, "\"-92233720368547758.08\"");
    }

    #[test]
    fn test_parse_pads_to_two_places() {
        assert_eq!("12.99".parse::<Money>().unwrap().cents(), 1299);
        assert_eq!("12.9".parse::<Money>().unwrap().cents(), 1290);
        assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_extra_precision_and_garbage() {
        for input in ["12.999", "12.990", "", "abc", "1.2.3"] {
            let err = input.parse::<Money>().unwrap_err();
            assert!(
                matches!(err.constraint(), Constraint::DecimalPlaces { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let err = "99999999999999999999.00".parse::<Money>().unwrap_err();
        assert!(matches!(err.constraint(), Constraint::Overflow { .. }));
    }

    #[test]
    fn test_try_from_decimal_checks_scale_and_range() {
        let decimal = Decimal::new(2598, 2);
        assert_eq!(Money::try_from(decimal).unwrap().cents(), 2598);

        let err = Money::try_from(Decimal::new(12990, 3)).unwrap_err();
        assert!(matches!(err.constraint(), Constraint::DecimalPlaces { .. }));

        let err = Money::try_from(Decimal::from(i64::MAX)).unwrap_err();
        assert!(matches!(err.constraint(), Constraint::Overflow { .. }));
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Money::try_from(12.99).unwrap().cents(), 1299);
        assert_eq!(Money::try_from(25.98).unwrap().cents(), 2598);
        assert_eq!(Money::try_from(0.1 + 0.2).unwrap_err().field(), "amount");
        assert_eq!(
            Money::try_from(f64::NAN).unwrap_err().constraint(),
            &Constraint::NotFinite
        );
    }

    #[test]
    fn test_serializes_as_fixed_two_decimal_string() {
        let json = serde_json::to_string(&Money::try_from(25.98).unwrap()).unwrap();
        assert_eq!(json, "\"25.98\"");
        let json = serde_json::to_string(&Money::from_cents(300)).unwrap();
        assert_eq!(json, "\"3.00\"");
    }

    #[test]
    fn test_deserializes_from_string_or_number() {
        let from_str: Money = serde_json::from_str("\"12.99\"").unwrap();
        let from_num: Money = serde_json::from_str("12.99").unwrap();
        let from_int: Money = serde_json::from_str("7").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_int.cents(), 700);
        assert!(serde_json::from_str::<Money>("12.999").is_err());
        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
    }

    #[test]
    fn test_number_and_string_read_identically() {
        for literal in ["90071992547409.93", "92233720368547758.07", "0.01"] {
            let from_num: Money = serde_json::from_str(literal).unwrap();
            let from_str: Money = serde_json::from_str(&format!("\"{literal}\"")).unwrap();
            assert_eq!(from_num, from_str, "{literal}");
            assert_eq!(from_num.to_string(), literal);
        }

        assert!(serde_json::from_str::<Money>("12.990").is_err());
        assert!(serde_json::from_str::<Money>("\"12.990\"").is_err());
    }

    #[test]
    fn test_integer_overflow_is_a_validation_error() {
        let err = serde_json::from_str::<Money>("92233720368547759").unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b).unwrap().cents(), 1500);
        assert_eq!(a.checked_multiply(3).unwrap().cents(), 3000);
        assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
        assert!(Money::from_cents(i64::MAX / 2).checked_multiply(3).is_none());
    }

    #[test]
    fn test_money_comparison() {
        assert!(Money::from_cents(100).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::from_cents(-100).is_positive());
    }
}
