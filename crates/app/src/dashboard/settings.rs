//! Contact settings panel

use std::{fmt, sync::Arc, time::Duration};

use consign::contact::ContactInfo;
use tracing::{error, info};

use crate::{domain::contacts::ContactsService, session::Session};

use super::{DashboardError, Operation, with_timeout};

/// Contact details printed on every exported report.
pub struct ContactSettings {
    service: Arc<dyn ContactsService>,
    session: Session,
    store_timeout: Duration,
    contact: ContactInfo,
    error: Option<String>,
}

impl fmt::Debug for ContactSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactSettings")
            .field("service", &"<ContactsService>")
            .field("session", &self.session)
            .field("store_timeout", &self.store_timeout)
            .field("contact", &self.contact)
            .field("error", &self.error)
            .finish()
    }
}

impl ContactSettings {
    /// Panel with empty settings for `session`; call [`ContactSettings::load`] to fill it.
    #[must_use]
    pub fn new(service: Arc<dyn ContactsService>, session: Session, store_timeout: Duration) -> Self {
        Self {
            service,
            session,
            store_timeout,
            contact: ContactInfo::default(),
            error: None,
        }
    }

    /// Contact details as last loaded or saved.
    #[must_use]
    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Message from the most recent failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the signed-in user's settings; a user who never saved any gets
    /// empty ones.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store call fails.
    pub async fn load(&mut self) -> Result<&ContactInfo, DashboardError> {
        let owner = self
            .session
            .current_user()
            .ok_or(DashboardError::NoSession)?;

        let result =
            with_timeout(self.store_timeout, self.service.get_contact_settings(owner)).await;

        match result {
            Ok(contact) => {
                self.contact = contact.unwrap_or_default();
                self.error = None;

                Ok(&self.contact)
            }
            Err(error) => Err(self.fail(Operation::LoadSettings, error)),
        }
    }

    /// Replace the signed-in user's settings.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store call fails;
    /// the previous settings are kept.
    pub async fn save(&mut self, contact: ContactInfo) -> Result<&ContactInfo, DashboardError> {
        let owner = self
            .session
            .current_user()
            .ok_or(DashboardError::NoSession)?;

        let result = with_timeout(
            self.store_timeout,
            self.service.upsert_contact_settings(owner, contact),
        )
        .await;

        match result {
            Ok(saved) => {
                info!(owner = %owner, "contact settings saved");

                self.contact = saved;
                self.error = None;

                Ok(&self.contact)
            }
            Err(error) => Err(self.fail(Operation::SaveSettings, error)),
        }
    }

    fn fail(&mut self, operation: Operation, error: DashboardError) -> DashboardError {
        error!(%operation, error = %error, "contact settings call failed");

        self.error = Some(operation.failure_message().to_string());

        error
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        contacts::{ContactsServiceError, MockContactsService},
        owners::OwnerUuid,
    };

    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            email: "office@example.com".to_string(),
            phone1: "20000001".to_string(),
            whatsapp1: "30000002".to_string(),
            ..ContactInfo::default()
        }
    }

    fn settings(mock: MockContactsService) -> ContactSettings {
        ContactSettings::new(
            Arc::new(mock),
            Session::signed_in(OwnerUuid::new()),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn missing_settings_load_as_empty() -> TestResult {
        let mut mock = MockContactsService::new();

        mock.expect_get_contact_settings()
            .times(1)
            .returning(|_| Ok(None));

        let mut panel = settings(mock);

        assert_eq!(panel.load().await?, &ContactInfo::default());

        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_settings() -> TestResult {
        let mut mock = MockContactsService::new();

        mock.expect_upsert_contact_settings()
            .times(1)
            .returning(|_, contact| Ok(contact));

        let mut panel = settings(mock);

        panel.save(contact()).await?;

        assert_eq!(panel.contact(), &contact());
        assert_eq!(panel.error(), None);

        Ok(())
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_settings() -> TestResult {
        let mut mock = MockContactsService::new();

        mock.expect_get_contact_settings()
            .times(1)
            .returning(|_| Ok(Some(contact())));

        mock.expect_upsert_contact_settings()
            .times(1)
            .returning(|_, _| Err(ContactsServiceError::InvalidData));

        let mut panel = settings(mock);

        panel.load().await?;

        let result = panel.save(ContactInfo::default()).await;

        assert!(result.is_err(), "expected save to fail");
        assert_eq!(panel.contact(), &contact());
        assert_eq!(
            panel.error(),
            Some(Operation::SaveSettings.failure_message())
        );

        Ok(())
    }

    #[test]
    fn debug_output_hides_service() {
        let debug = format!("{:?}", settings(MockContactsService::new()));

        assert!(debug.contains("<ContactsService>"), "debug: {debug}");
        assert!(debug.contains("store_timeout: 1s"), "debug: {debug}");
    }

    #[tokio::test]
    async fn anonymous_session_cannot_load() {
        let mut mock = MockContactsService::new();
        mock.expect_get_contact_settings().never();

        let mut panel = ContactSettings::new(
            Arc::new(mock),
            Session::default(),
            Duration::from_secs(1),
        );

        assert!(
            matches!(panel.load().await, Err(DashboardError::NoSession)),
            "load without a session should fail"
        );
    }
}
