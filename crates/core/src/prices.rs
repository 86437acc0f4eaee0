//! Quantities and unit prices
//!
//! Both types carry their invariant in the type: a [`Quantity`] is never
//! below one and a [`UnitPrice`] is never negative. Free-form input is
//! coerced with [`Quantity::parse_clamped`] and [`UnitPrice::parse_clamped`],
//! which clamp instead of failing.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Number of units ordered; at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity {
    value: u32,
}

impl Quantity {
    /// The smallest valid quantity.
    pub const ONE: Quantity = Quantity { value: 1 };

    /// Creates a quantity, returning `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self { value })
    }

    /// Creates a quantity from any integer, clamping values below one up to one.
    pub fn clamped(value: i64) -> Self {
        let value = u32::try_from(value.max(1)).unwrap_or(u32::MAX);

        Self { value }
    }

    /// Coerces free-form input to a quantity.
    ///
    /// Decimal and exponent input (`4.9`, `1e3`) is truncated. Empty,
    /// non-numeric and sub-one input becomes one; numbers above the largest
    /// quantity saturate.
    pub fn parse_clamped(input: &str) -> Self {
        let input = input.trim();

        if let Ok(value) = input.parse::<i64>() {
            return Self::clamped(value);
        }

        match parse_decimal(input) {
            Some(value) if value < Decimal::ONE => Self::ONE,
            Some(value) => Self {
                value: value.trunc().to_u32().unwrap_or(u32::MAX),
            },
            None if is_unsigned_integer(input) => Self { value: u32::MAX },
            None => Self::ONE,
        }
    }

    /// The raw count.
    pub fn get(self) -> u32 {
        self.value
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Deref for Quantity {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

/// Price of a single unit; never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitPrice {
    value: Decimal,
}

impl UnitPrice {
    /// A price of zero.
    pub const ZERO: UnitPrice = UnitPrice {
        value: Decimal::ZERO,
    };

    /// Creates a price, returning `None` when negative.
    pub fn new(value: Decimal) -> Option<Self> {
        (!value.is_sign_negative() || value.is_zero()).then_some(Self {
            value: value.normalize(),
        })
    }

    /// Creates a price, clamping negative values to zero.
    pub fn clamped(value: Decimal) -> Self {
        Self::new(value).unwrap_or(Self::ZERO)
    }

    /// Coerces free-form input to a price.
    ///
    /// Empty, non-numeric and negative input becomes zero.
    pub fn parse_clamped(input: &str) -> Self {
        let input = input.trim();

        parse_decimal(input).map_or(Self::ZERO, Self::clamped)
    }

    /// The raw amount.
    pub fn get(self) -> Decimal {
        self.value
    }
}

impl Deref for UnitPrice {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Display for UnitPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

/// Plain or exponent notation.
fn parse_decimal(input: &str) -> Option<Decimal> {
    Decimal::from_str(input)
        .or_else(|_parse_error| Decimal::from_scientific(input))
        .ok()
}

/// Digits too many for a decimal, e.g. a pasted serial number.
fn is_unsigned_integer(input: &str) -> bool {
    let digits = input.strip_prefix('+').unwrap_or(input);

    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}
