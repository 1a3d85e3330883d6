use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 4;
const DISPLAY_PLACES: u32 = 2;

/// An exact decimal amount of money.
///
/// Arithmetic is checked; callers decide how an overflow is reported.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub const ZERO: Monetary = Monetary(Decimal::ZERO);

    pub const fn from_decimal(value: Decimal) -> Self {
        Monetary(value)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }

    /// Multiplies by a fractional rate such as `0.02`.
    pub fn checked_mul_rate(self, rate: Decimal) -> Option<Monetary> {
        self.0.checked_mul(rate).map(Monetary)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Monetary {
    fn from(value: Decimal) -> Self {
        Monetary::from_decimal(value)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        // Keep the sign of overdrawn amounts that round to zero.
        let sign = if self.is_negative() { "-" } else { "" };
        write!(formatter, "{}{:.width$}", sign, rounded.abs(), width = DISPLAY_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value [{value}] is not a number: {error}"))
        })?;

        if decimal.normalize().scale() > DECIMAL_PLACES {
            return Err(MonetaryError::InvalidFormat("Value has too many decimal places".to_string()));
        }

        Ok(Monetary(decimal))
    }
}
