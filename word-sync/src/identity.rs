use word_types::UserIdentity;

/// Whatever authentication backend is in use, all this crate needs from it
/// is a stable identifier for the signed-in user.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserIdentity>;
}

/// Fixed identity for tests and single-user tools.
pub struct StaticIdentity {
    identity: UserIdentity,
}

impl StaticIdentity {
    pub fn new(identity: UserIdentity) -> Self {
        Self { identity }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserIdentity> {
        Some(self.identity.clone())
    }
}
