#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use async_trait::async_trait;
use http_body_util::BodyExt;
use tower::ServiceExt;

use swfav_api::config::{ServerConfig, StoreBackend};
use swfav_api::router::build_app_router;
use swfav_api::state::AppState;
use swfav_catalog::CatalogClient;
use swfav_core::favorite::{Favorite, NewFavorite};
use swfav_core::service::FavoriteService;
use swfav_core::store::{FavoriteStore, StoreError};
use swfav_db::MemoryFavoriteStore;

/// Store double whose every call fails as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl FavoriteStore for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<Favorite>, StoreError> {
        Err(StoreError::Unavailable("connection refused (os error 111)".into()))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Favorite>, StoreError> {
        Err(StoreError::Unavailable("connection refused (os error 111)".into()))
    }

    async fn insert(&self, _favorite: NewFavorite) -> Result<Favorite, StoreError> {
        Err(StoreError::Unavailable("connection refused (os error 111)".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused (os error 111)".into()))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(catalog_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        store_backend: StoreBackend::Memory,
        database_url: None,
        catalog_base_url: catalog_base_url.to_string(),
    }
}

/// Build the full application router over `store`, with the catalog client
/// pointed at `catalog_base_url`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with(store: Arc<dyn FavoriteStore>, catalog_base_url: &str) -> Router {
    let config = test_config(catalog_base_url);
    let state = AppState {
        favorites: FavoriteService::new(store),
        catalog: CatalogClient::new(catalog_base_url),
    };
    build_app_router(state, &config)
}

/// Build the app over a fresh in-memory store with an unreachable catalog.
pub async fn build_test_app() -> (Router, Arc<MemoryFavoriteStore>) {
    let store = Arc::new(MemoryFavoriteStore::new());
    let app = build_test_app_with(Arc::clone(&store) as Arc<dyn FavoriteStore>, &unreachable_base_url().await);
    (app, store)
}

/// Build the app over a store that is down.
pub async fn build_unavailable_store_app() -> Router {
    build_test_app_with(Arc::new(UnavailableStore), &unreachable_base_url().await)
}

/// Serve `router` on an ephemeral local port and return its `/api` base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL on a local port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
