//! Money carried as whole units plus nanos.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Arithmetic and formatting go through `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of nanos in one whole unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Errors raised when building a [`Money`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Nanos outside -999,999,999..=999,999,999.
    #[error("Nanos out of range: {0}")]
    NanosOutOfRange(i32),

    /// Units and nanos carry opposite signs.
    #[error("Sign mismatch: units {units} and nanos {nanos}")]
    SignMismatch {
        /// Whole units.
        units: i64,
        /// Fractional nanos.
        nanos: i32,
    },

    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// Amount does not fit in 64-bit whole units.
    #[error("Amount out of range: {0}")]
    Overflow(Decimal),
}

/// A monetary amount.
///
/// `value = units + nanos / 1e9`. When the amount is negative both parts
/// are non-positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MoneyParts")]
pub struct Money {
    /// Whole units of the currency.
    pub units: i64,
    /// Nano units (10^-9) of the currency.
    pub nanos: i32,
    /// ISO 4217 currency code (e.g., "CAD", "USD").
    pub currency_code: String,
    /// Display string precomputed by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Wire shape of [`Money`], checked by `Money::new` on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyParts {
    units: i64,
    nanos: i32,
    currency_code: String,
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<MoneyParts> for Money {
    type Error = MoneyError;

    fn try_from(parts: MoneyParts) -> Result<Self, Self::Error> {
        let money = Self::new(parts.units, parts.nanos, parts.currency_code)?;
        Ok(Self {
            value: parts.value,
            ..money
        })
    }
}

impl Money {
    /// Creates a new `Money`, checking the units/nanos invariants.
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Result<Self, MoneyError> {
        let currency_code = normalize_currency(currency_code.into())?;

        if nanos <= -NANOS_PER_UNIT || nanos >= NANOS_PER_UNIT {
            return Err(MoneyError::NanosOutOfRange(nanos));
        }
        if (units > 0 && nanos < 0) || (units < 0 && nanos > 0) {
            return Err(MoneyError::SignMismatch { units, nanos });
        }

        Ok(Self {
            units,
            nanos,
            currency_code,
            value: None,
        })
    }

    /// Creates a zero amount in the specified currency.
    pub fn zero(currency_code: impl Into<String>) -> Result<Self, MoneyError> {
        Self::new(0, 0, currency_code)
    }

    /// Builds a `Money` from a decimal amount, rounding beyond nano precision.
    pub fn from_decimal(amount: Decimal, currency_code: impl Into<String>) -> Result<Self, MoneyError> {
        let scaled = amount
            .checked_mul(Decimal::from(NANOS_PER_UNIT))
            .ok_or(MoneyError::Overflow(amount))?
            .round()
            .to_i128()
            .ok_or(MoneyError::Overflow(amount))?;

        let per_unit = i128::from(NANOS_PER_UNIT);
        let units = i64::try_from(scaled / per_unit).map_err(|_| MoneyError::Overflow(amount))?;
        // |scaled % per_unit| < NANOS_PER_UNIT, so this never fails.
        let nanos = i32::try_from(scaled % per_unit).map_err(|_| MoneyError::Overflow(amount))?;

        Self::new(units, nanos, currency_code)
    }

    /// Attaches a precomputed display string.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the amount as a decimal.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.units) + Decimal::new(i64::from(self.nanos), 9)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.units < 0 || self.nanos < 0
    }

    /// Returns the string shown to users.
    ///
    /// Prefers the precomputed `value`; otherwise formats the amount as
    /// `$1,234.5` (at most three fractional digits, trailing zeros dropped).
    #[must_use]
    pub fn display(&self) -> String {
        match &self.value {
            Some(value) => value.clone(),
            None => format_amount(self.to_decimal()),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_decimal().normalize(), self.currency_code)
    }
}

fn normalize_currency(code: String) -> Result<String, MoneyError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(MoneyError::InvalidCurrency(code))
    }
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
