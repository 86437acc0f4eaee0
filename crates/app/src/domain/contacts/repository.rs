//! Contact Settings Repository

use consign::contact::ContactInfo;
use sqlx::{Postgres, Transaction, query_as};

use crate::domain::{contacts::records::ContactSettingsRecord, owners::OwnerUuid};

const GET_CONTACT_SETTINGS_SQL: &str = include_str!("sql/get_contact_settings.sql");
const UPSERT_CONTACT_SETTINGS_SQL: &str = include_str!("sql/upsert_contact_settings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgContactsRepository;

impl PgContactsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_contact_settings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<Option<ContactSettingsRecord>, sqlx::Error> {
        query_as::<Postgres, ContactSettingsRecord>(GET_CONTACT_SETTINGS_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn upsert_contact_settings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        contact: &ContactInfo,
    ) -> Result<ContactSettingsRecord, sqlx::Error> {
        query_as::<Postgres, ContactSettingsRecord>(UPSERT_CONTACT_SETTINGS_SQL)
            .bind(owner.into_uuid())
            .bind(contact.email.trim())
            .bind(contact.phone1.trim())
            .bind(contact.phone2.trim())
            .bind(contact.whatsapp1.trim())
            .bind(contact.whatsapp2.trim())
            .fetch_one(&mut **tx)
            .await
    }
}
