// ── Favourites store ──
//
// Persistent, owner-scoped favourites. The store assigns ids and is the
// only writer of persisted state; controllers keep an in-memory mirror.

mod documents;

use std::future::Future;

pub use documents::DocumentFavourites;

use crate::error::CoreError;
use crate::identity::UserId;
use crate::model::SavedFlight;

/// Owner-scoped favourites persistence.
///
/// Every operation fails with [`CoreError::NotAuthenticated`] when
/// `owner` is `None`.
pub trait FavouritesStore: Send + Sync + 'static {
    /// Persist a favourite, returning the store-assigned id.
    fn add(
        &self,
        flight: &SavedFlight,
        owner: Option<&UserId>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// All favourites of `owner`, each carrying its id.
    fn list(
        &self,
        owner: Option<&UserId>,
    ) -> impl Future<Output = Result<Vec<SavedFlight>, CoreError>> + Send;

    /// Remove one favourite. A record that is already gone counts as removed.
    fn delete(
        &self,
        id: &str,
        owner: Option<&UserId>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Unwrap the owner or fail with `NotAuthenticated`.
pub fn require_owner(owner: Option<&UserId>) -> Result<&UserId, CoreError> {
    owner.ok_or(CoreError::NotAuthenticated)
}

/// Reject blank favourite ids.
pub fn validate_reference(id: &str) -> Result<&str, CoreError> {
    if id.trim().is_empty() {
        Err(CoreError::InvalidReference {
            reason: "missing document id".into(),
        })
    } else {
        Ok(id)
    }
}
