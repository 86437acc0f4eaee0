//! Application configuration
//!
//! Every setting can be given on the command line or through the
//! environment; a `.env` file is loaded first when present.

use clap::Args;

use crate::config::{
    db::DatabaseConfig, export::ExportConfig, observability::LoggingConfig, session::SessionConfig,
};

pub mod db;
pub mod export;
pub mod observability;
pub mod session;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Signed-in identity and store call limits.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Report export settings.
    #[command(flatten)]
    pub export: ExportConfig,
}
