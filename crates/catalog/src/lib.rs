//! Read-only client for the Star Wars catalog API.
//!
//! Fetches the films and people collections and hands back the upstream JSON
//! untouched. No caching, pagination or retries.

/// Public catalog API used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Catalog collection path for films.
pub const FILMS_PATH: &str = "films";
/// Catalog collection path for people.
pub const PEOPLE_PATH: &str = "people";

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed, or the body was not JSON.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl CatalogClient {
    /// Create a client for the catalog rooted at `base_url`,
    /// e.g. `https://swapi.dev/api`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/films`
    pub async fn fetch_movies(&self) -> Result<serde_json::Value, CatalogError> {
        self.fetch_collection(FILMS_PATH).await
    }

    /// `GET {base}/people`
    pub async fn fetch_people(&self) -> Result<serde_json::Value, CatalogError> {
        self.fetch_collection(PEOPLE_PATH).await
    }

    // ---- private helpers ----

    async fn fetch_collection(&self, path: &str) -> Result<serde_json::Value, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "Fetching catalog collection");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
