pub mod catalog;
pub mod favorites;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /favorites                                       list, create
/// /movies                                          catalog films (proxy)
/// /people                                          catalog people (proxy)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(favorites::router())
        .merge(catalog::router())
}
