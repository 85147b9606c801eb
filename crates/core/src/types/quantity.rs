//! Cart quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be a positive integer")]
    NotPositive,
}

/// A cart line quantity: always a positive integer.
///
/// Driving a quantity to zero is expressed by removing the line, never by
/// storing a zero quantity, so zero is unrepresentable here. No upper bound
/// is enforced; stock-availability checking is out of scope for the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    /// A quantity of one, the default for a new cart line.
    pub const ONE: Self = Self(1);

    /// Validate an integer as a quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is less than 1.
    pub const fn parse(value: i32) -> Result<Self, QuantityError> {
        if value < 1 {
            return Err(QuantityError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Get the underlying integer value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Sum of two quantities, saturating at `i32::MAX`.
    ///
    /// Used when an add-to-cart accumulates into an existing line.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Quantity {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Quantity {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let v = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are constrained by CHECK (quantity > 0)
        Ok(Self(v))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Quantity {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(Quantity::parse(1).unwrap(), Quantity::ONE);
        assert_eq!(Quantity::parse(40).unwrap().as_i32(), 40);
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert_eq!(Quantity::parse(0), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::parse(-1), Err(QuantityError::NotPositive));
    }

    #[test]
    fn test_saturating_add() {
        let a = Quantity::parse(2).unwrap();
        let b = Quantity::parse(3).unwrap();
        assert_eq!(a.saturating_add(b).as_i32(), 5);

        let max = Quantity::parse(i32::MAX).unwrap();
        assert_eq!(max.saturating_add(Quantity::ONE).as_i32(), i32::MAX);
    }

    #[test]
    fn test_serde_transparent() {
        let q = Quantity::parse(7).unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "7");
        let parsed: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, q);
    }
}
