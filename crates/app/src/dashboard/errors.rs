//! Dashboard errors.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Duration,
};

use consign::{editor::EditorError, export::ExportError, products::ProductUuid};
use thiserror::Error;
use tokio::time::error::Elapsed;

use crate::domain::{contacts::ContactsServiceError, products::ProductsServiceError};

/// What the user was doing when a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Add,
    Edit,
    Remove,
    LoadSettings,
    SaveSettings,
}

impl Operation {
    /// Short message shown to the user when the operation fails.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load products. Please try again later.",
            Operation::Add => "Failed to add product. Please try again.",
            Operation::Edit => "Failed to update product. Please try again.",
            Operation::Remove => "Failed to delete product. Please try again.",
            Operation::LoadSettings => "Failed to load contact settings.",
            Operation::SaveSettings => "Failed to save contact settings.",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Edit => "edit",
            Operation::Remove => "remove",
            Operation::LoadSettings => "load settings",
            Operation::SaveSettings => "save settings",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no user is signed in")]
    NoSession,

    #[error("product {0} is not in the list")]
    UnknownProduct(ProductUuid),

    #[error("no deletion is awaiting confirmation")]
    NothingToConfirm,

    #[error("no editor is open")]
    NoEditor,

    #[error("no product details are open")]
    NoDetails,

    #[error("store call timed out after {after:?}")]
    TimedOut {
        after: Duration,

        #[source]
        source: Elapsed,
    },

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Contacts(#[from] ContactsServiceError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
