// Favourites over the document store: `users/{owner}/favourites/{id}`.

use flightdeck_api::DocumentClient;
use tracing::debug;

use super::{FavouritesStore, require_owner, validate_reference};
use crate::convert::{document_to_saved, saved_to_document};
use crate::error::CoreError;
use crate::identity::UserId;
use crate::model::SavedFlight;

const USERS: &str = "users";
const FAVOURITES: &str = "favourites";

/// [`FavouritesStore`] backed by a [`DocumentClient`].
pub struct DocumentFavourites {
    client: DocumentClient,
}

impl DocumentFavourites {
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }
}

impl FavouritesStore for DocumentFavourites {
    async fn add(&self, flight: &SavedFlight, owner: Option<&UserId>) -> Result<String, CoreError> {
        let owner = require_owner(owner)?;
        let created = self
            .client
            .create_document(&[USERS, owner.as_str(), FAVOURITES], &saved_to_document(flight))
            .await
            .map_err(|e| CoreError::store(&e))?;

        let id = created.id().to_owned();
        debug!(owner = %owner, id = %id, "favourite created");
        Ok(id)
    }

    async fn list(&self, owner: Option<&UserId>) -> Result<Vec<SavedFlight>, CoreError> {
        let owner = require_owner(owner)?;
        let docs = self
            .client
            .list_documents(&[USERS, owner.as_str(), FAVOURITES])
            .await
            .map_err(|e| CoreError::store(&e))?;

        Ok(docs.iter().map(document_to_saved).collect())
    }

    async fn delete(&self, id: &str, owner: Option<&UserId>) -> Result<(), CoreError> {
        let owner = require_owner(owner)?;
        let id = validate_reference(id)?;

        match self
            .client
            .delete_document(&[USERS, owner.as_str(), FAVOURITES, id])
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!(owner = %owner, id, "favourite already gone");
                Ok(())
            }
            Err(e) => Err(CoreError::store(&e)),
        }
    }
}
