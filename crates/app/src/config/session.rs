//! Session Config

use std::time::Duration;

use clap::Args;
use consign::editor::{DEFAULT_MAX_IMAGE_BYTES, EditorConfig};
use uuid::Uuid;

use crate::{dashboard::ListConfig, domain::owners::OwnerUuid, session::Session};

/// Identity and store call settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Signed-in user; records and contact settings are scoped to it
    #[arg(long, env = "CONSIGN_USER_UUID")]
    pub user_uuid: Option<Uuid>,

    /// Seconds to wait for a store call before giving up
    #[arg(long, env = "STORE_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub store_timeout_seconds: u64,

    /// Largest product image accepted, in bytes
    #[arg(long, env = "MAX_IMAGE_BYTES", default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
    pub max_image_bytes: usize,
}

impl SessionConfig {
    /// Session for the configured identity, if any.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.user_uuid.map(OwnerUuid::from_uuid))
    }

    /// Timeout applied to every store call.
    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_seconds)
    }

    /// Editor settings derived from this config.
    #[must_use]
    pub fn editor(&self) -> EditorConfig {
        EditorConfig {
            max_image_bytes: self.max_image_bytes,
        }
    }

    /// List controller settings derived from this config.
    #[must_use]
    pub fn list(&self) -> ListConfig {
        ListConfig {
            store_timeout: self.store_timeout(),
            editor: self.editor(),
        }
    }
}
