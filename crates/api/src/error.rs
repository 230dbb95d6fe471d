use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use swfav_catalog::CatalogError;
use swfav_core::error::CoreError;

use crate::response::MessageResponse;

/// Message returned for every failure whose details must stay server-side.
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`]; catalog failures arrive as [`CoreError::Upstream`].
/// Implements [`IntoResponse`] to produce `{ "message": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `swfav_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Core(CoreError::Upstream(err.to_string()))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    /// Every failure is answered with 500. Validation and conflict messages
    /// are shown to the caller; storage and upstream details are only logged.
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidInput(msg) | CoreError::Conflict(msg) => {
                    tracing::info!(error = %msg, "Favorite rejected");
                    msg.clone()
                }
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Storage failure");
                    MSG_GENERIC_FAILURE.to_string()
                }
                CoreError::Upstream(msg) => {
                    tracing::error!(error = %msg, "Upstream failure");
                    MSG_GENERIC_FAILURE.to_string()
                }
            },
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(MessageResponse { message }),
        )
            .into_response()
    }
}
