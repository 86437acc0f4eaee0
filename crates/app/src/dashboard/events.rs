//! List events and observers

use consign::{products::ProductUuid, search::ShippingFilter};

use super::{Modal, Operation, ViewMode};

/// A change to the list controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A store call started or finished.
    LoadingChanged(bool),

    /// The full record set was replaced by a load.
    Loaded {
        /// Records now held
        count: usize,
    },

    /// A record was created and placed first.
    Added(ProductUuid),

    /// A record was replaced in place.
    Updated(ProductUuid),

    /// A record was removed.
    Removed(ProductUuid),

    /// A collaborator call failed; local records are unchanged.
    Failed {
        /// What was being attempted
        operation: Operation,

        /// Message shown to the user
        message: String,
    },

    /// The search text changed.
    QueryChanged(String),

    /// The shipping filter changed.
    ShippingFilterChanged(Option<ShippingFilter>),

    /// Cards or table.
    ViewModeChanged(ViewMode),

    /// A modal opened or closed.
    ModalChanged(Modal),
}

/// Receives every [`ListEvent`] the controller emits, in order.
pub trait ListObserver: Send + Sync {
    /// Called after the controller's state has changed.
    fn on_event(&mut self, event: &ListEvent);
}

/// No-op observer.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ListObserver for NoopObserver {
    fn on_event(&mut self, _event: &ListEvent) {}
}
