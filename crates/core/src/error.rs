/// Message returned when a submission names an unsupported favorite type.
pub const MSG_INVALID_TYPE: &str = "\"type\" should be \"movie\" or \"character\"!";

/// Message returned when a submission has an empty name.
pub const MSG_EMPTY_NAME: &str = "\"name\" must not be empty!";

/// Message returned when a favorite with the same name is already stored.
pub const MSG_DUPLICATE: &str = "Favorite exists already!";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The submission failed a domain validation rule.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A favorite with the same name already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The favorites store is unreachable or rejected the operation.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// The upstream catalog API is unreachable or returned an error.
    #[error("Upstream failure: {0}")]
    Upstream(String),
}
