//! Pass-through handlers for the upstream catalog API.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::{MoviesResponse, PeopleResponse};
use crate::state::AppState;

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = state.catalog.fetch_movies().await?;

    Ok(Json(MoviesResponse { movies }))
}

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let people = state.catalog.fetch_people().await?;

    Ok(Json(PeopleResponse { people }))
}
