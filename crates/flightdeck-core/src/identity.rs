// ── Signed-in identity ──
//
// Controllers read the current user once at the start of each operation
// through an `IdentityProvider` handle; nothing here is global.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Opaque id of a signed-in user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// `None` for a blank id.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the currently signed-in user, if any.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// In-memory session that can be signed in and out at runtime.
///
/// Readers take a snapshot; a sign-out mid-operation does not affect an
/// operation that already read the identity.
#[derive(Debug)]
pub struct Session {
    user: watch::Sender<Option<UserId>>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            user: watch::Sender::new(None),
        }
    }

    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: watch::Sender::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: UserId) {
        self.user.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.user.send_replace(None);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl IdentityProvider for Session {
    fn current_user(&self) -> Option<UserId> {
        self.user.borrow().clone()
    }
}
