//! Favorites workflow: listing and the validate / check / insert sequence.

use std::sync::Arc;

use crate::error::{CoreError, MSG_DUPLICATE};
use crate::favorite::{validate_new_favorite, Favorite};
use crate::store::{FavoriteStore, StoreError};

/// Lists and creates favorites against an injected [`FavoriteStore`].
///
/// Cheap to clone; clones share the same store handle.
#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<dyn FavoriteStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn FavoriteStore>) -> Self {
        Self { store }
    }

    /// The underlying store handle.
    pub fn store(&self) -> &Arc<dyn FavoriteStore> {
        &self.store
    }

    /// Every stored favorite in insertion order.
    pub async fn list_favorites(&self) -> Result<Vec<Favorite>, CoreError> {
        self.store.find_all().await.map_err(storage_error)
    }

    /// Validate and store a new favorite.
    ///
    /// Nothing is written unless the submission is valid and no favorite with
    /// the same name exists. The pre-check is advisory; a duplicate reported
    /// by the store on insert is the authoritative conflict.
    pub async fn create_favorite(
        &self,
        name: &str,
        favorite_type: &str,
        url: &str,
    ) -> Result<Favorite, CoreError> {
        let new = validate_new_favorite(name, favorite_type, url)?;

        let existing = self
            .store
            .find_by_name(&new.name)
            .await
            .map_err(storage_error)?;
        if existing.is_some() {
            return Err(CoreError::Conflict(MSG_DUPLICATE.to_string()));
        }

        match self.store.insert(new).await {
            Ok(favorite) => {
                tracing::debug!(favorite_id = favorite.id, "Favorite inserted");
                Ok(favorite)
            }
            Err(StoreError::Duplicate(name)) => {
                tracing::warn!(name = %name, "Concurrent insert won the name");
                Err(CoreError::Conflict(MSG_DUPLICATE.to_string()))
            }
            Err(err) => Err(storage_error(err)),
        }
    }
}

fn storage_error(err: StoreError) -> CoreError {
    CoreError::Storage(err.to_string())
}
