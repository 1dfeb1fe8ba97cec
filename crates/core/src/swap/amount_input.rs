use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::constants::MAX_AMOUNT_LENGTH;
use crate::errors::ValidationError;

lazy_static! {
    /// ASCII digits, optionally one decimal point. Empty text is allowed.
    static ref AMOUNT_PATTERN: Regex =
        Regex::new(r"^[0-9]*\.?[0-9]*$").expect("Invalid regex pattern");
}

/// Amount text that passed the input boundary.
///
/// Holds only ASCII digits and at most one `.`, at most
/// [`MAX_AMOUNT_LENGTH`] characters. It may still be empty or a lone `.`;
/// [`value`](Self::value) returns `None` for those.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AmountInput(String);

impl AmountInput {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !AMOUNT_PATTERN.is_match(text) {
            return Err(ValidationError::InvalidAmount(text.to_string()));
        }

        if text.len() > MAX_AMOUNT_LENGTH {
            return Err(ValidationError::AmountTooLong {
                max: MAX_AMOUNT_LENGTH,
            });
        }

        Ok(Self(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value, or `None` when the text is empty or not a number.
    pub fn value(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AmountInput {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for AmountInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_and_one_point() {
        for text in ["", "0", "1", "12.5", ".5", "5.", ".", "123456789012", "1234567890.1"] {
            assert!(AmountInput::parse(text).is_ok(), "expected '{}' to pass", text);
        }
    }

    #[test]
    fn test_rejects_second_decimal_point() {
        assert_eq!(
            AmountInput::parse("12.34.56"),
            Err(ValidationError::InvalidAmount("12.34.56".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_digits() {
        for text in ["-1", "1e5", "abc", "1,000", " 1", "inf", "NaN", "+2", "١٢"] {
            assert!(
                matches!(
                    AmountInput::parse(text),
                    Err(ValidationError::InvalidAmount(_))
                ),
                "expected '{}' to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_rejects_over_twelve_characters() {
        assert_eq!(
            AmountInput::parse("1234567890123"),
            Err(ValidationError::AmountTooLong { max: 12 })
        );
        assert_eq!(
            AmountInput::parse("12345678901.2"),
            Err(ValidationError::AmountTooLong { max: 12 })
        );
    }

    #[test]
    fn test_value() {
        assert_eq!(AmountInput::parse("").unwrap().value(), None);
        assert_eq!(AmountInput::parse(".").unwrap().value(), None);
        assert_eq!(AmountInput::parse("5.").unwrap().value(), Some(5.0));
        assert_eq!(AmountInput::parse(".25").unwrap().value(), Some(0.25));
        assert_eq!(AmountInput::parse("007").unwrap().value(), Some(7.0));
    }

    #[test]
    fn test_serializes_as_string() {
        let amount = AmountInput::parse("1.5").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"1.5\"");
        assert_eq!(amount.to_string(), "1.5");
    }
}
