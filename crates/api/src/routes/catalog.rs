use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog proxy routes.
///
/// ```text
/// GET    /movies            -> list_movies
/// GET    /people            -> list_people
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(catalog::list_movies))
        .route("/people", get(catalog::list_people))
}
