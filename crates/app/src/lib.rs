//! Consign application: record store, dashboard controllers and configuration.

pub mod config;
pub mod context;
pub mod dashboard;
pub mod database;
pub mod domain;
pub mod observability;
pub mod session;

#[cfg(test)]
mod test;
