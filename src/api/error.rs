//! Mapping of failures onto HTTP responses.

use crate::error::NavigationError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Error body: `{ "statusCode": 400, "message": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more input faults, reported together.
    BadRequest(Vec<String>),
    /// The robot would leave the room.
    Forbidden(String),
    NotFound(String),
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(reasons) => {
                // A Vec<String> always serializes.
                let list = serde_json::to_string(reasons).unwrap_or_default();
                format!("Bad Request: {list}.")
            }
            ApiError::Forbidden(message) | ApiError::NotFound(message) => message.clone(),
            ApiError::Internal => "Internal Server Error".to_string(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status().as_u16(),
            message: self.message(),
        }
    }
}

impl From<NavigationError> for ApiError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::InvalidRoomSize
            | NavigationError::StartOutOfBounds
            | NavigationError::InvalidOrientation(_)
            | NavigationError::InvalidCommands
            | NavigationError::InvalidCommand(_) => ApiError::BadRequest(vec![err.to_string()]),
            // 403 is what existing clients of this endpoint expect.
            NavigationError::OutOfBounds { .. } => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body();
        tracing::debug!(status = body.status_code, message = %body.message, "request failed");
        (self.status(), Json(body)).into_response()
    }
}
