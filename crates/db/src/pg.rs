//! PostgreSQL-backed favorites store over the `favorites` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use swfav_core::favorite::{Favorite, FavoriteType, NewFavorite};
use swfav_core::store::{FavoriteStore, StoreError};
use swfav_core::types::{DbId, Timestamp};

/// Column list for `favorites` queries.
const FAVORITE_COLUMNS: &str = "id, name, favorite_type, url, created_at";

/// Unique constraint on `favorites.name`.
const UQ_FAVORITES_NAME: &str = "uq_favorites_name";

/// PostgreSQL error code for unique constraint violations.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// A row from the `favorites` table.
#[derive(Debug, FromRow)]
struct FavoriteRow {
    id: DbId,
    name: String,
    favorite_type: String,
    url: String,
    created_at: Timestamp,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = StoreError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let favorite_type = row.favorite_type.parse::<FavoriteType>().map_err(|_| {
            StoreError::Unavailable(format!(
                "favorite {} has unknown type '{}'",
                row.id, row.favorite_type
            ))
        })?;

        Ok(Favorite {
            id: row.id,
            name: row.name,
            favorite_type,
            url: row.url,
            created_at: row.created_at,
        })
    }
}

/// Favorites store backed by a shared connection pool.
#[derive(Clone)]
pub struct PgFavoriteStore {
    pool: PgPool,
}

impl PgFavoriteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for PgFavoriteStore {
    async fn find_all(&self) -> Result<Vec<Favorite>, StoreError> {
        let query = format!("SELECT {FAVORITE_COLUMNS} FROM favorites ORDER BY id");
        let rows = sqlx::query_as::<_, FavoriteRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        rows.into_iter().map(Favorite::try_from).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Favorite>, StoreError> {
        let query = format!("SELECT {FAVORITE_COLUMNS} FROM favorites WHERE name = $1");
        sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?
            .map(Favorite::try_from)
            .transpose()
    }

    async fn insert(&self, favorite: NewFavorite) -> Result<Favorite, StoreError> {
        let query = format!(
            "INSERT INTO favorites (name, favorite_type, url) \
             VALUES ($1, $2, $3) \
             RETURNING {FAVORITE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(favorite.name.as_str())
            .bind(favorite.favorite_type.as_str())
            .bind(favorite.url.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match classify_sqlx_error(err) {
                StoreError::Duplicate(_) => StoreError::Duplicate(favorite.name.clone()),
                other => other,
            })?;

        Favorite::try_from(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Classify a sqlx error into a [`StoreError`].
///
/// Only a unique violation on `uq_favorites_name` is a duplicate; everything
/// else is reported as unavailable.
fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
            && db_err.constraint() == Some(UQ_FAVORITES_NAME)
        {
            return StoreError::Duplicate(String::new());
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Unavailable(err.to_string())
}
