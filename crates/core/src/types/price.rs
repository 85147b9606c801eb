//! Monetary amounts as exact decimals.
//!
//! Prices are stored and transmitted as fixed-precision decimals, never
//! binary floats. The JSON representation is a decimal string (e.g.
//! `"115000.00"`), matching the `NUMERIC(10,2)` columns in the store.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
    /// The amount does not fit in NUMERIC(10,2).
    #[error("price cannot exceed {max}")]
    TooLarge {
        /// Maximum representable amount.
        max: Decimal,
    },
    /// The input string is not a decimal number.
    #[error("price is not a valid decimal: {0}")]
    Malformed(String),
}

/// A non-negative monetary amount in Naira.
///
/// ## Constraints
///
/// - Must be zero or positive
/// - Must fit in `NUMERIC(10,2)` (at most 99,999,999.99)
/// - Normalized to two decimal places
///
/// ## Examples
///
/// ```
/// use naijamart_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::parse(Decimal::new(11_500_000, 2)).unwrap();
/// assert_eq!(price.to_string(), "115000.00");
///
/// assert!(Price::parse(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Largest amount representable in a `NUMERIC(10,2)` column.
    pub const MAX: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

    /// Validate a decimal as a price.
    ///
    /// The amount is rounded (banker's rounding) to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or exceeds [`Price::MAX`].
    pub fn parse(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge { max: Self::MAX });
        }
        let mut amount = amount.round_dp(2);
        amount.rescale(2);
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: Decimal = s
            .parse()
            .map_err(|_| PriceError::Malformed(s.to_owned()))?;
        Self::parse(amount)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
