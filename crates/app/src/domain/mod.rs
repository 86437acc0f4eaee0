//! Consign Domain Concerns

pub mod contacts;
pub mod owners;
pub mod products;
