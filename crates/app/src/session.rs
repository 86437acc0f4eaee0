//! Session

use crate::domain::owners::OwnerUuid;

/// Identity of the signed-in user, passed explicitly to whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<OwnerUuid>,
}

impl Session {
    /// Session for `user`, or an anonymous one.
    #[must_use]
    pub fn new(user: Option<OwnerUuid>) -> Self {
        Self { user }
    }

    /// Session signed in as `user`.
    #[must_use]
    pub fn signed_in(user: OwnerUuid) -> Self {
        Self::new(Some(user))
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<OwnerUuid> {
        self.user
    }
}
