//! Consign
//!
//! Product and order records for a small trading office: typed records, the
//! search/shipping projection over a record list, the record editor, pricing
//! and the report renderers used for printing and exporting.

pub mod contact;
pub mod currency;
pub mod editor;
pub mod export;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod search;
pub mod shipping;
pub mod uuids;
