use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes.
///
/// ```text
/// GET    /favorites         -> list_favorites
/// POST   /favorites         -> create_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/favorites",
        get(favorites::list_favorites).post(favorites::create_favorite),
    )
}
