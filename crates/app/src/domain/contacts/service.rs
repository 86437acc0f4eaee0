//! Contacts service.

use async_trait::async_trait;
use consign::contact::ContactInfo;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        contacts::{errors::ContactsServiceError, repository::PgContactsRepository},
        owners::OwnerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgContactsService {
    db: Db,
    repository: PgContactsRepository,
}

impl PgContactsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgContactsRepository::new(),
        }
    }
}

#[async_trait]
impl ContactsService for PgContactsService {
    async fn get_contact_settings(
        &self,
        owner: OwnerUuid,
    ) -> Result<Option<ContactInfo>, ContactsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let record = self.repository.get_contact_settings(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(record.map(ContactInfo::from))
    }

    async fn upsert_contact_settings(
        &self,
        owner: OwnerUuid,
        contact: ContactInfo,
    ) -> Result<ContactInfo, ContactsServiceError> {
        let mut tx = self.db.begin_owner_transaction(owner).await?;

        let record = self
            .repository
            .upsert_contact_settings(&mut tx, owner, &contact)
            .await?;

        tx.commit().await?;

        Ok(record.into())
    }
}

/// Per-owner contact settings shown on exported reports.
#[automock]
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// Retrieves the owner's contact settings, if any were saved.
    async fn get_contact_settings(
        &self,
        owner: OwnerUuid,
    ) -> Result<Option<ContactInfo>, ContactsServiceError>;

    /// Creates or replaces the owner's contact settings.
    async fn upsert_contact_settings(
        &self,
        owner: OwnerUuid,
        contact: ContactInfo,
    ) -> Result<ContactInfo, ContactsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn contact(email: &str) -> ContactInfo {
        ContactInfo {
            email: email.to_string(),
            phone1: "20000001".to_string(),
            whatsapp1: "30000002".to_string(),
            ..ContactInfo::default()
        }
    }

    #[tokio::test]
    async fn settings_are_absent_until_saved() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(ctx.contacts.get_contact_settings(ctx.owner).await?, None);

        let saved = ctx
            .contacts
            .upsert_contact_settings(ctx.owner, contact("office@example.com"))
            .await?;

        assert_eq!(saved, contact("office@example.com"));
        assert_eq!(
            ctx.contacts.get_contact_settings(ctx.owner).await?,
            Some(saved)
        );

        Ok(())
    }

    #[tokio::test]
    async fn upsert_replaces_previous_settings() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.contacts
            .upsert_contact_settings(ctx.owner, contact("old@example.com"))
            .await?;

        ctx.contacts
            .upsert_contact_settings(ctx.owner, contact("new@example.com"))
            .await?;

        assert_eq!(
            ctx.contacts.get_contact_settings(ctx.owner).await?,
            Some(contact("new@example.com"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn settings_are_private_to_their_owner() -> TestResult {
        let ctx = TestContext::new().await;
        let other = OwnerUuid::new();

        ctx.contacts
            .upsert_contact_settings(ctx.owner, contact("office@example.com"))
            .await?;

        assert_eq!(ctx.contacts.get_contact_settings(other).await?, None);

        Ok(())
    }
}
