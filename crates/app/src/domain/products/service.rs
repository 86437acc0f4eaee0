//! Products service.

use async_trait::async_trait;
use consign::products::{Product, ProductDetails, ProductUuid};
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        owners::OwnerUuid,
        products::{
            errors::ProductsServiceError,
            records::{ProductChangeset, ProductRecord},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self, owner: OwnerUuid) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let records = self.repository.list_products(&mut tx, owner).await?;

        tx.commit().await?;

        records
            .into_iter()
            .map(|record| Product::try_from(record).map_err(ProductsServiceError::from))
            .collect()
    }

    async fn create_product(
        &self,
        owner: OwnerUuid,
        details: ProductDetails,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let created = self
            .repository
            .create_product(
                &mut tx,
                owner,
                ProductUuid::new(),
                ProductChangeset::from(&details),
            )
            .await?;

        tx.commit().await?;

        into_product(created)
    }

    async fn update_product(
        &self,
        owner: OwnerUuid,
        product: ProductUuid,
        details: ProductDetails,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let updated = self
            .repository
            .update_product(&mut tx, owner, product, ProductChangeset::from(&details))
            .await?;

        tx.commit().await?;

        into_product(updated)
    }

    async fn delete_product(
        &self,
        owner: OwnerUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let rows_affected = self
            .repository
            .delete_product(&mut tx, owner, product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

fn into_product(record: ProductRecord) -> Result<Product, ProductsServiceError> {
    Ok(Product::try_from(record)?)
}

/// Record store for products, scoped by owner.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product of `owner`, newest first.
    async fn list_products(&self, owner: OwnerUuid) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a product; the store assigns its identifier.
    async fn create_product(
        &self,
        owner: OwnerUuid,
        details: ProductDetails,
    ) -> Result<Product, ProductsServiceError>;

    /// Replaces every field of a product except its identifier.
    async fn update_product(
        &self,
        owner: OwnerUuid,
        product: ProductUuid,
        details: ProductDetails,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(
        &self,
        owner: OwnerUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}
