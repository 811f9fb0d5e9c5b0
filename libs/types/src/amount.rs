//! Fixed-point token amounts
//!
//! Every balance is an unsigned 128-bit integer counting base units, with
//! 18 fractional decimal digits. All arithmetic is checked; there is no
//! wrapping or saturating path. `rust_decimal` is used only at the API
//! boundary for human-scale values.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Fractional decimal digits carried by every amount
pub const DECIMALS: u32 = 18;

/// Base units in one whole token (10^18)
pub const UNIT: u128 = 10u128.pow(DECIMALS);

/// Conversion failures at the decimal boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {value}")]
    Negative { value: String },

    #[error("Amount has more than 18 fractional digits: {value}")]
    ExcessPrecision { value: String },

    #[error("Amount exceeds the representable range: {value}")]
    OutOfRange { value: String },
}

/// A token amount in base units (1 token = 10^18 base units)
///
/// Serializes as a decimal string of base units so JSON consumers never
/// lose precision to floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// The largest representable amount
    pub const MAX: Amount = Amount(u128::MAX);

    /// Construct from raw base units
    pub fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Construct from a whole number of tokens
    pub fn from_whole(tokens: u64) -> Self {
        Self(tokens as u128 * UNIT)
    }

    /// Raw base units
    pub fn raw(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Convert a decimal token value into base units.
    ///
    /// Rejects negative values, values with more than 18 meaningful
    /// fractional digits, and values the scaling multiply cannot hold.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative {
                value: value.to_string(),
            });
        }
        if value.normalize().scale() > DECIMALS {
            return Err(AmountError::ExcessPrecision {
                value: value.to_string(),
            });
        }
        let unit = Decimal::from(10u64.pow(DECIMALS));
        let scaled = value.checked_mul(unit).ok_or_else(|| AmountError::OutOfRange {
            value: value.to_string(),
        })?;
        let raw = scaled
            .trunc()
            .to_u128()
            .ok_or_else(|| AmountError::OutOfRange {
                value: value.to_string(),
            })?;
        Ok(Self(raw))
    }

    /// Convert back to a decimal token value.
    ///
    /// Returns `None` when the raw value exceeds the 96-bit mantissa of
    /// `Decimal`; callers needing totals beyond that stay in base units.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mut value = Decimal::from_u128(self.0)?;
        value.set_scale(DECIMALS).ok()?;
        Some(value.normalize())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNIT;
        let frac = self.0 % UNIT;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let digits = format!("{:018}", frac);
            write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u128>()
            .map(Amount)
            .map_err(|e| de::Error::custom(format!("invalid amount {:?}: {}", raw, e)))
    }
}
