//! Handlers for the favorites resource.
//!
//! Favorites can be listed and created; there is no update or delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use swfav_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::{FavoriteSavedResponse, FavoritesResponse, MSG_FAVORITE_SAVED};
use crate::state::AppState;

/// Request body for `POST /favorites`.
///
/// Fields are kept as raw JSON so that missing, null or mistyped values reach
/// domain validation instead of failing in the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateFavoriteRequest {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub favorite_type: Option<Value>,
    pub url: Option<Value>,
}

impl CreateFavoriteRequest {
    /// The submitted type, or `""` when it is not a JSON string.
    pub fn favorite_type(&self) -> &str {
        match &self.favorite_type {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn name(&self) -> String {
        scalar_text(self.name.as_ref())
    }

    pub fn url(&self) -> String {
        scalar_text(self.url.as_ref())
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling, anything
/// else as `""`.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

/// GET /favorites
///
/// List every stored favorite in insertion order.
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let favorites = state.favorites.list_favorites().await?;

    Ok(Json(FavoritesResponse { favorites }))
}

/// POST /favorites
///
/// Validate and store a new favorite. Responds 201 with the stored record.
pub async fn create_favorite(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| {
        AppError::Core(CoreError::InvalidInput(rejection.body_text()))
    })?;

    let favorite = state
        .favorites
        .create_favorite(&input.name(), input.favorite_type(), &input.url())
        .await?;

    tracing::info!(
        favorite_id = favorite.id,
        name = %favorite.name,
        favorite_type = %favorite.favorite_type,
        "Favorite saved",
    );

    Ok((
        StatusCode::CREATED,
        Json(FavoriteSavedResponse {
            message: MSG_FAVORITE_SAVED,
            favorite,
        }),
    ))
}
