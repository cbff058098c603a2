//! Error types for the storage layer, startup configuration and the HTTP surface
//!
//! Storage and configuration failures are internal. Only [`ApiError`] is ever
//! turned into a response, and its 500 variant carries nothing but an opaque
//! message so that storage details never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of the persistence gateway (database file, transaction, table or
/// document encoding). Every caller treats it as "storage unavailable".
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] redb::Error),

    #[error("corrupt document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// redb reports each stage with its own error type; funnel them all through `redb::Error`.
macro_rules! storage_error_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for StoreError {
                fn from(err: $source) -> Self {
                    StoreError::Unavailable(err.into())
                }
            }
        )*
    };
}

storage_error_from!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

/// Process configuration problems detected before the server starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),

    #[error("environment variable {name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Errors returned by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("Product not found")]
    ProductNotFound,

    /// Opaque server-side failure. The message is safe to show to callers;
    /// the cause has already been logged by the handler.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::AlreadySubscribed => (StatusCode::BAD_REQUEST, "already_subscribed"),
            ApiError::ProductNotFound => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        (
            status,
            Json(json!({
                "error": self.to_string(),
                "code": code,
            })),
        )
            .into_response()
    }
}
