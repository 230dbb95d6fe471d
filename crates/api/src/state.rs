use swfav_catalog::CatalogClient;
use swfav_core::service::FavoriteService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (both fields share their inner handles).
#[derive(Clone)]
pub struct AppState {
    /// Favorites workflow over the configured store.
    pub favorites: FavoriteService,
    /// Upstream catalog client.
    pub catalog: CatalogClient,
}
