//! Products

use rusty_money::{Money, iso};

use crate::{
    currency::Currency,
    prices::{Quantity, UnitPrice},
    pricing::{self, TotalPriceError},
    shipping::ShippingMode,
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Every field of a product record except its identifier.
///
/// This is the payload the editor produces and the store accepts on create
/// and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetails {
    /// Inline `data:` URL or a plain image URL.
    pub image: String,

    /// Product name
    pub name: String,

    /// Units ordered
    pub quantity: Quantity,

    /// Price of one unit, in `currency`
    pub price: UnitPrice,

    /// Currency of `price`
    pub currency: Currency,

    /// Customer the order belongs to
    pub customer_name: String,

    /// Customer phone number
    pub phone_number: String,

    /// Air or sea freight
    pub shipping_mode: ShippingMode,

    /// Free text, e.g. "7-10 days"
    pub shipping_duration: String,
}

impl ProductDetails {
    /// Quantity times unit price, in the record's own currency.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] when the total does not fit in a decimal.
    pub fn total(&self) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
        pricing::line_total(self)
    }
}

/// Product record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned identifier; never changes.
    pub uuid: ProductUuid,

    /// Everything else about the product.
    pub details: ProductDetails,
}

impl Product {
    /// Create a product record from its parts.
    pub fn new(uuid: ProductUuid, details: ProductDetails) -> Self {
        Self { uuid, details }
    }

    /// Quantity times unit price, in the record's own currency.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] when the total does not fit in a decimal.
    pub fn total(&self) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
        self.details.total()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn total_is_quantity_times_price() {
        let details = ProductDetails {
            quantity: Quantity::clamped(3),
            price: UnitPrice::clamped(Decimal::new(250, 2)),
            currency: Currency::Mru,
            ..ProductDetails::default()
        };

        let product = Product::new(ProductUuid::new(), details);

        assert_eq!(
            product.total(),
            Ok(Money::from_decimal(Decimal::new(750, 2), iso::MRU))
        );
    }
}
