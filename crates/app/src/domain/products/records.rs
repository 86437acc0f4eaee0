//! Product Records
//!
//! Store shape of a product and its translation to and from the in-memory
//! record. Enumerations are stored as text and quantities as `BIGINT`; rows
//! that fall outside the record's invariants are rejected rather than
//! clamped.

use consign::{
    currency::{Currency, UnknownCurrency},
    prices::{Quantity, UnitPrice},
    products::{Product, ProductDetails, ProductUuid},
    shipping::{ShippingMode, UnknownShippingMode},
};
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::owners::OwnerUuid;

/// A stored product row that does not describe a valid record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordMappingError {
    #[error(transparent)]
    Currency(#[from] UnknownCurrency),

    #[error(transparent)]
    ShippingMode(#[from] UnknownShippingMode),

    #[error("stored quantity {0} is out of range")]
    Quantity(i64),

    #[error("stored price {0} is negative")]
    Price(Decimal),
}

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub owner: OwnerUuid,
    pub image: String,
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub currency: String,
    pub customer_name: String,
    pub phone_number: String,
    pub shipping_mode: String,
    pub shipping_duration: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ProductRecord> for Product {
    type Error = RecordMappingError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(record.quantity)
            .ok()
            .and_then(Quantity::new)
            .ok_or(RecordMappingError::Quantity(record.quantity))?;

        let price = UnitPrice::new(record.price).ok_or(RecordMappingError::Price(record.price))?;

        Ok(Product::new(
            record.uuid,
            ProductDetails {
                image: record.image,
                name: record.name,
                quantity,
                price,
                currency: record.currency.parse::<Currency>()?,
                customer_name: record.customer_name,
                phone_number: record.phone_number,
                shipping_mode: record.shipping_mode.parse::<ShippingMode>()?,
                shipping_duration: record.shipping_duration,
            },
        ))
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            owner: OwnerUuid::from_uuid(row.try_get::<Uuid, _>("user_uuid")?),
            image: row.try_get("image")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
            currency: row.try_get("currency")?,
            customer_name: row.try_get("customer_name")?,
            phone_number: row.try_get("phone_number")?,
            shipping_mode: row.try_get("shipping_mode")?,
            shipping_duration: row.try_get("shipping_duration")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Column values bound on insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProductChangeset<'a> {
    pub image: &'a str,
    pub name: &'a str,
    pub quantity: i64,
    pub price: Decimal,
    pub currency: &'static str,
    pub customer_name: &'a str,
    pub phone_number: &'a str,
    pub shipping_mode: &'static str,
    pub shipping_duration: &'a str,
}

impl<'a> From<&'a ProductDetails> for ProductChangeset<'a> {
    fn from(details: &'a ProductDetails) -> Self {
        Self {
            image: &details.image,
            name: &details.name,
            quantity: i64::from(details.quantity.get()),
            price: details.price.get(),
            currency: details.currency.code(),
            customer_name: &details.customer_name,
            phone_number: &details.phone_number,
            shipping_mode: details.shipping_mode.code(),
            shipping_duration: &details.shipping_duration,
        }
    }
}
