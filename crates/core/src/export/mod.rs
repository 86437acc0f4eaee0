//! Report export
//!
//! [`ReportContent`] is built once from the records being exported and the
//! contact metadata; the screen table ([`ReportContent::write_table`]) and the
//! downloadable document ([`TypstRenderer`]) both render from it and keep no
//! state of their own.

use std::{io, slice};

use rusty_money::MoneyError;
use thiserror::Error;
use tracing::debug;

use crate::{
    contact::{ContactInfo, Organization},
    editor::{ImageKind, image},
    pricing::{self, TotalPriceError},
    products::Product,
};

mod table;
pub mod typst;

pub use typst::TypstRenderer;

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("there are no products to export")]
    Empty,

    /// Totals could not be computed.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Product image as it appears in a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// Decoded inline image
    Inline {
        /// Verified image format
        kind: ImageKind,

        /// Raw image bytes
        bytes: Vec<u8>,
    },

    /// Hosted image that is linked rather than embedded
    Remote(String),

    /// No usable image
    Missing,
}

impl Thumbnail {
    fn from_image(image_field: &str) -> Self {
        let image_field = image_field.trim();

        if image_field.is_empty() {
            return Thumbnail::Missing;
        }

        if !image::is_data_url(image_field) {
            return Thumbnail::Remote(image_field.to_string());
        }

        match image::decode_data_url(image_field) {
            Ok((kind, bytes)) => Thumbnail::Inline { kind, bytes },
            Err(error) => {
                debug!(%error, "skipping unreadable thumbnail");

                Thumbnail::Missing
            }
        }
    }
}

/// One exported record, with every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Position in the export, starting at one
    pub number: usize,

    /// Customer name
    pub customer: String,

    /// Customer phone number
    pub phone: String,

    /// Product image
    pub thumbnail: Thumbnail,

    /// Product name
    pub name: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price with currency code, e.g. `10.00 USD`
    pub price: String,

    /// "Aerial" or "Marine"
    pub shipping: &'static str,

    /// Free-text shipping duration
    pub duration: String,

    /// Quantity times price with currency code
    pub total: String,
}

impl ReportRow {
    fn new(number: usize, product: &Product) -> Result<Self, TotalPriceError> {
        let details = &product.details;

        Ok(Self {
            number,
            customer: details.customer_name.clone(),
            phone: details.phone_number.clone(),
            thumbnail: Thumbnail::from_image(&details.image),
            name: details.name.clone(),
            quantity: details.quantity.get(),
            price: pricing::format_amount(details.price.get(), details.currency),
            shipping: details.shipping_mode.label(),
            duration: details.shipping_duration.clone(),
            total: pricing::format_money(&details.total()?),
        })
    }
}

/// Grand total of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrandTotal {
    /// Every record shares a currency
    Single(String),

    /// One subtotal per currency, in order of first appearance
    PerCurrency(Vec<String>),
}

impl GrandTotal {
    fn compute(products: &[Product]) -> Result<Self, ExportError> {
        match pricing::total_price(products) {
            Ok(total) => Ok(GrandTotal::Single(pricing::format_money(&total))),
            Err(TotalPriceError::Money(MoneyError::CurrencyMismatch { .. })) => {
                let subtotals = pricing::subtotals(products)?
                    .iter()
                    .map(|subtotal| pricing::format_amount(subtotal.amount, subtotal.currency))
                    .collect();

                Ok(GrandTotal::PerCurrency(subtotals))
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Summary lines as printed under the table.
    pub fn lines(&self) -> Vec<String> {
        match self {
            GrandTotal::Single(total) => vec![format!("Total Amount: {total}")],
            GrandTotal::PerCurrency(subtotals) => subtotals
                .iter()
                .map(|subtotal| format!("Total Amount: {subtotal}"))
                .collect(),
        }
    }
}

/// Everything a report shows, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    /// Business identity for the header
    pub organization: Organization,

    /// Contact details for the header
    pub contact: ContactInfo,

    /// One row per exported record, in export order
    pub rows: Vec<ReportRow>,

    /// Grand total
    pub total: GrandTotal,
}

impl ReportContent {
    /// Build a report for `products`, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Empty`]: `products` is empty.
    /// - [`ExportError::TotalPrice`]: totals could not be computed.
    pub fn build(
        organization: &Organization,
        contact: &ContactInfo,
        products: &[Product],
    ) -> Result<Self, ExportError> {
        if products.is_empty() {
            return Err(ExportError::Empty);
        }

        let rows = products
            .iter()
            .enumerate()
            .map(|(idx, product)| ReportRow::new(idx + 1, product))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            organization: organization.clone(),
            contact: contact.clone(),
            rows,
            total: GrandTotal::compute(products)?,
        })
    }

    /// Build a report for a single record.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::TotalPrice`] if the total cannot be computed.
    pub fn single(
        organization: &Organization,
        contact: &ContactInfo,
        product: &Product,
    ) -> Result<Self, ExportError> {
        Self::build(organization, contact, slice::from_ref(product))
    }

    /// Header lines: organization identity followed by contact metadata.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.organization.name.clone(),
            self.organization.tagline.clone(),
            self.organization.location.clone(),
        ];

        let contact = [
            ("Email", self.contact.email.trim().to_string()),
            ("Phone", self.contact.phones()),
            ("WhatsApp", self.contact.whatsapps()),
        ];

        lines.extend(
            contact
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{label}: {value}")),
        );

        lines
    }
}
