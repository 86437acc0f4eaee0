//! Search and shipping filters
//!
//! A [`ProductFilter`] never owns or copies records: [`ProductFilter::apply`]
//! yields a lazy [`FilteredView`] over the full list, so the projection is
//! recomputed from the current list every time it is asked for.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    iter::FusedIterator,
    slice,
    str::FromStr,
};

use thiserror::Error;

use crate::{products::Product, shipping::ShippingMode};

/// Returned when text does not name a shipping filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported shipping filter `{0}` (expected all, air or sea)")]
pub struct UnknownShippingFilter(pub String);

/// Shipping filter selected by the user.
///
/// Unset is modelled as `Option::None` by callers; both unset and
/// [`ShippingFilter::All`] admit every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingFilter {
    /// Every shipping mode
    All,

    /// Only records shipped this way
    Only(ShippingMode),
}

impl ShippingFilter {
    /// Whether a record shipped with `mode` passes this filter.
    pub fn admits(self, mode: ShippingMode) -> bool {
        match self {
            ShippingFilter::All => true,
            ShippingFilter::Only(only) => only == mode,
        }
    }

    /// Selecting the active filter again clears it; anything else replaces it.
    pub fn toggle(current: Option<Self>, selected: Self) -> Option<Self> {
        if current == Some(selected) {
            None
        } else {
            Some(selected)
        }
    }
}

impl Display for ShippingFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ShippingFilter::All => f.write_str("all"),
            ShippingFilter::Only(mode) => Display::fmt(mode, f),
        }
    }
}

impl FromStr for ShippingFilter {
    type Err = UnknownShippingFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ShippingFilter::All);
        }

        s.parse::<ShippingMode>()
            .map(ShippingFilter::Only)
            .map_err(|error| UnknownShippingFilter(error.0))
    }
}

/// Search text plus optional shipping filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free text matched against name, customer name and phone number
    pub query: String,

    /// Optional shipping filter; `None` admits every record
    pub shipping: Option<ShippingFilter>,
}

impl ProductFilter {
    /// Filter with the given query and no shipping filter.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            shipping: None,
        }
    }

    /// Whether a single record passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        Self::matches_lowercase(&self.query.to_lowercase(), self.shipping, product)
    }

    /// Lazily project `products`, keeping their order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> FilteredView<'a> {
        FilteredView {
            products: products.iter(),
            needle: self.query.to_lowercase(),
            shipping: self.shipping,
        }
    }

    fn matches_lowercase(
        needle: &str,
        shipping: Option<ShippingFilter>,
        product: &Product,
    ) -> bool {
        let details = &product.details;

        let matches_search = needle.is_empty()
            || [
                &details.name,
                &details.customer_name,
                &details.phone_number,
            ]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle));

        let matches_shipping =
            shipping.is_none_or(|filter| filter.admits(details.shipping_mode));

        matches_search && matches_shipping
    }
}

/// Read-only, lazily evaluated projection of a record list.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    products: slice::Iter<'a, Product>,
    needle: String,
    shipping: Option<ShippingFilter>,
}

impl<'a> Iterator for FilteredView<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        let shipping = self.shipping;

        self.products
            .by_ref()
            .find(|product| ProductFilter::matches_lowercase(needle, shipping, product))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.products.size_hint().1)
    }
}

impl FusedIterator for FilteredView<'_> {}
