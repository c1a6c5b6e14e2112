//! Payment amount value object.
//!
//! The processor only accepts amounts as strings with exactly two decimal
//! digits. `Amount` owns that normalization so nothing else has to.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::errors::PaymentError;

/// Number of decimal places the processor expects for EUR amounts.
const MINOR_UNIT_DIGITS: u32 = 2;

/// Currencies accepted by the checkout.
///
/// Tickets are only ever sold in euros, so this is a single-variant enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code as sent on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A non-negative monetary amount rounded to two decimal places.
///
/// Rounding is half away from zero, so `10.005` becomes `10.01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a client-supplied amount.
    ///
    /// Accepts plain decimals (`"25"`, `"10.005"`) and exponent notation
    /// (`"1e2"`). Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidAmount` if the input is empty, is not a
    /// number, or is negative.
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PaymentError::invalid_amount(raw, "amount is required"));
        }

        let value = parse_decimal(trimmed)
            .ok_or_else(|| PaymentError::invalid_amount(raw, "not a number"))?;

        Self::from_decimal(value).map_err(|reason| PaymentError::invalid_amount(raw, reason))
    }

    fn from_decimal(value: Decimal) -> Result<Self, &'static str> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err("amount must not be negative");
        }

        let mut rounded =
            value.round_dp_with_strategy(MINOR_UNIT_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // Drops the sign of "-0" so it renders as "0.00".
            rounded = Decimal::ZERO;
        }
        rounded.rescale(MINOR_UNIT_DIGITS);

        Ok(Self(rounded))
    }

    /// The normalized decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Wire representation: always exactly two decimal digits.
    pub fn to_processor_value(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    // `Decimal` accepts `_` as a digit separator; a float parse does not.
    if s.contains('_') {
        return None;
    }

    if s.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(s).ok()
    } else {
        Decimal::from_str(s).ok()
    }
}
