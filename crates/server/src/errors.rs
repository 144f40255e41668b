use std::net::SocketAddr;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::StoreError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body returned by every employee route: `{"error", "message"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let (status, title, message) = (self.status, self.title, &self.message);
        if status.is_server_error() {
            error!(%status, error = title, ?message, "request failed");
        } else {
            warn!(%status, error = title, ?message, "request rejected");
        }
        let body = serde_json::json!({"error": title, "message": self.message});
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for JsonApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            StoreError::InvalidArgument(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Invalid Argument", Some(e.to_string()))
            }
        }
    }
}

// Bodies are decoded by hand so the Content-Type header is never consulted.
impl From<serde_json::Error> for JsonApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Request Body", Some(e.to_string()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Employee ID", Some(e.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
