//! The persistence seam consumed by [`crate::service::FavoriteService`].

use async_trait::async_trait;

use crate::favorite::{Favorite, NewFavorite};

/// Errors a [`FavoriteStore`] implementation may report.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store's uniqueness constraint on `name` rejected the insert.
    #[error("favorite named '{0}' already stored")]
    Duplicate(String),

    /// The store could not be reached or failed the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A collection of favorites keyed by name.
///
/// Implementations must be safe for concurrent use and must enforce name
/// uniqueness themselves, reporting violations as [`StoreError::Duplicate`].
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Every stored favorite, in insertion order.
    async fn find_all(&self) -> Result<Vec<Favorite>, StoreError>;

    /// The favorite whose name equals `name` exactly, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<Favorite>, StoreError>;

    /// Store `favorite` and return it with its assigned id.
    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, StoreError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
