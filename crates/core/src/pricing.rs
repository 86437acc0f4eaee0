//! Prices
//!
//! Totals are always computed in the record's own currency. Sums across
//! records only succeed when every record shares a currency; mixed sets are
//! summed per currency with [`subtotals`] instead of being combined.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, MoneyError, iso};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    currency::Currency,
    products::{Product, ProductDetails},
};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No products were provided, so currency could not be determined.
    #[error("no products provided; cannot determine currency")]
    NoProducts,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A line total or sum does not fit in a decimal.
    #[error("total is too large to represent")]
    Overflow,
}

/// Sum of line totals for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtotal {
    /// Currency of the amount
    pub currency: Currency,

    /// Sum of quantity times price
    pub amount: Decimal,
}

impl Subtotal {
    /// The amount as money.
    pub fn money(&self) -> Money<'static, iso::Currency> {
        Money::from_decimal(self.amount, self.currency.iso())
    }
}

/// Quantity times unit price for one record, as a bare amount.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] when the product does not fit in a decimal.
pub fn line_amount(details: &ProductDetails) -> Result<Decimal, TotalPriceError> {
    details
        .price
        .get()
        .checked_mul(Decimal::from(details.quantity.get()))
        .ok_or(TotalPriceError::Overflow)
}

/// Quantity times unit price for one record.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] when the product does not fit in a decimal.
pub fn line_total(details: &ProductDetails) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
    Ok(Money::from_decimal(line_amount(details)?, details.currency.iso()))
}

/// Calculates the total price of a list of products that share a currency.
///
/// # Errors
///
/// - [`TotalPriceError::NoProducts`]: No products were provided, so currency could not be determined.
/// - [`TotalPriceError::Money`]: The products are priced in more than one currency.
/// - [`TotalPriceError::Overflow`]: A line total or the sum does not fit in a decimal.
pub fn total_price(products: &[Product]) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
    let first = products.first().ok_or(TotalPriceError::NoProducts)?;
    let currency = first.details.currency;

    let amount = products.iter().try_fold(Decimal::ZERO, |acc, product| {
        if product.details.currency != currency {
            return Err(TotalPriceError::Money(MoneyError::CurrencyMismatch {
                expected: currency.iso().iso_alpha_code,
                actual: product.details.currency.iso().iso_alpha_code,
            }));
        }

        acc.checked_add(line_amount(&product.details)?)
            .ok_or(TotalPriceError::Overflow)
    })?;

    Ok(Money::from_decimal(amount, currency.iso()))
}

/// Sums line totals per currency, in order of first appearance.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] when a line total or a sum does not
/// fit in a decimal.
pub fn subtotals(products: &[Product]) -> Result<SmallVec<[Subtotal; 3]>, TotalPriceError> {
    let mut subtotals: SmallVec<[Subtotal; 3]> = SmallVec::new();

    for product in products {
        let line = line_amount(&product.details)?;

        match subtotals
            .iter_mut()
            .find(|subtotal| subtotal.currency == product.details.currency)
        {
            Some(subtotal) => {
                subtotal.amount = subtotal
                    .amount
                    .checked_add(line)
                    .ok_or(TotalPriceError::Overflow)?;
            }
            None => subtotals.push(Subtotal {
                currency: product.details.currency,
                amount: line,
            }),
        }
    }

    Ok(subtotals)
}

/// Formats an amount with two decimal places followed by the currency code,
/// e.g. `35.00 USD`.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    format!("{} {}", two_places(amount), currency.code())
}

/// Formats money produced by this module, falling back to the ISO code for
/// currencies outside [`Currency`].
pub fn format_money(money: &Money<'_, iso::Currency>) -> String {
    match Currency::from_iso(money.currency()) {
        Some(currency) => format_amount(*money.amount(), currency),
        None => format!(
            "{} {}",
            two_places(*money.amount()),
            money.currency().iso_alpha_code
        ),
    }
}

/// Rounds half away from zero and always keeps two decimal places.
fn two_places(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    rounded
}
