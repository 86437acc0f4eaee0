//! Dashboard
//!
//! The in-memory side of the application: the product list controller, its
//! events, and the contact settings panel. Every store call made from here
//! is bounded by the configured timeout.

use std::{future::Future, time::Duration};

use consign::products::ProductUuid;
use tokio::time::timeout;

mod controller;
mod errors;
mod events;
mod settings;

pub use controller::*;
pub use errors::*;
pub use events::*;
pub use settings::*;

/// Cards or table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

/// Which modal, if any, is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,

    /// Record editor, in create or modify mode
    Editor,

    /// Read-only details of one record
    Details(ProductUuid),

    /// Delete confirmation for one record
    ConfirmDelete(ProductUuid),

    /// Contact settings
    Settings,
}

/// Transient presentation flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiFlags {
    /// A store call is in flight
    pub loading: bool,

    /// Message from the most recent failure, cleared by the next success
    pub error: Option<String>,

    /// Open modal
    pub modal: Modal,
}

/// Run a store call, giving up after `after`.
pub(crate) async fn with_timeout<T, E, F>(after: Duration, call: F) -> Result<T, DashboardError>
where
    F: Future<Output = Result<T, E>>,
    DashboardError: From<E>,
{
    match timeout(after, call).await {
        Ok(result) => result.map_err(DashboardError::from),
        Err(source) => Err(DashboardError::TimedOut { after, source }),
    }
}
