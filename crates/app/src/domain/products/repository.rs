//! Products Repository

use consign::products::ProductUuid;
use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{
    owners::OwnerUuid,
    products::records::{ProductChangeset, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        product: ProductUuid,
        changeset: ProductChangeset<'_>,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(owner.into_uuid())
            .bind(changeset.image)
            .bind(changeset.name)
            .bind(changeset.quantity)
            .bind(changeset.price)
            .bind(changeset.currency)
            .bind(changeset.customer_name)
            .bind(changeset.phone_number)
            .bind(changeset.shipping_mode)
            .bind(changeset.shipping_duration)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        product: ProductUuid,
        changeset: ProductChangeset<'_>,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(owner.into_uuid())
            .bind(changeset.image)
            .bind(changeset.name)
            .bind(changeset.quantity)
            .bind(changeset.price)
            .bind(changeset.currency)
            .bind(changeset.customer_name)
            .bind(changeset.phone_number)
            .bind(changeset.shipping_mode)
            .bind(changeset.shipping_duration)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(owner.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
