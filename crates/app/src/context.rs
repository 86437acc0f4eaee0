//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::session::SessionConfig,
    dashboard::{ContactSettings, ProductList},
    database::{self, Db},
    domain::{
        contacts::{ContactsService, PgContactsService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Store services shared by every command.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub contacts: Arc<dyn ContactsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            contacts: Arc::new(PgContactsService::new(db)),
        })
    }

    /// Product list controller for the configured session.
    #[must_use]
    pub fn product_list(&self, config: &SessionConfig) -> ProductList {
        ProductList::new(
            Arc::clone(&self.products),
            config.session(),
            config.list(),
        )
    }

    /// Contact settings panel for the configured session.
    #[must_use]
    pub fn contact_settings(&self, config: &SessionConfig) -> ContactSettings {
        ContactSettings::new(
            Arc::clone(&self.contacts),
            config.session(),
            config.store_timeout(),
        )
    }
}
