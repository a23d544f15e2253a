//! REST API module
//!
//! - `GET /events` - sequential/directional window
//! - `GET /events/around` - date-anchored window
//! - `GET /events/search` - substring search
//! - `POST /events` / `PUT /events/:id` / `DELETE /events/:id` - mutations

pub mod events;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Query parameters for the sequential/directional window endpoint
///
/// `limit` and `cursorId` arrive as raw strings and are parsed leniently:
/// a mangled limit falls back to the default, a mangled cursor matches no
/// event.
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    #[serde(rename = "cursorId")]
    pub cursor_id: Option<String>,
    pub direction: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters for the date-anchored window endpoint
#[derive(Debug, Deserialize)]
pub struct AroundParams {
    pub date: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<String>,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a store error to a status code and error envelope
pub fn error_response(err: StoreError) -> (StatusCode, ApiError) {
    match err {
        StoreError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, ApiError::bad_request(msg)),
        StoreError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::not_found(msg)),
        err => {
            tracing::error!(error = %err, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(err.to_string()),
            )
        }
    }
}
