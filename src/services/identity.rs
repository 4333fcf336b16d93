//! Holder for the identity signed in during a browsing session. The OTP flow
//! writes into it on success; header, profile and quiz views read from it.

use crate::models::User;

#[derive(Debug, Default)]
pub struct SessionHolder {
    user: Option<User>,
}

impl SessionHolder {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Overwrites any current identity.
    pub fn login(&mut self, user: User) {
        tracing::info!("identity {} signed in", user.id);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("identity {} signed out", user.id);
        }
    }
}
