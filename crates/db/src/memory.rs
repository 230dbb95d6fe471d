//! In-process favorites store.
//!
//! Keeps favorites in a `Vec` behind a [`RwLock`]. Name uniqueness is checked
//! under the write lock, so concurrent inserts of the same name cannot both
//! succeed. Contents are lost when the process exits.

use async_trait::async_trait;
use swfav_core::favorite::{Favorite, NewFavorite};
use swfav_core::store::{FavoriteStore, StoreError};
use swfav_core::types::DbId;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: Vec<Favorite>,
    next_id: DbId,
}

/// Favorites store held entirely in memory.
#[derive(Default)]
pub struct MemoryFavoriteStore {
    inner: RwLock<Inner>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored favorites.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FavoriteStore for MemoryFavoriteStore {
    async fn find_all(&self) -> Result<Vec<Favorite>, StoreError> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Favorite>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|f| f.name == name).cloned())
    }

    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.rows.iter().any(|f| f.name == favorite.name) {
            return Err(StoreError::Duplicate(favorite.name));
        }

        inner.next_id += 1;
        let stored = Favorite {
            id: inner.next_id,
            name: favorite.name,
            favorite_type: favorite.favorite_type,
            url: favorite.url,
            created_at: chrono::Utc::now(),
        };
        inner.rows.push(stored.clone());

        Ok(stored)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
