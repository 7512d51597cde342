// Response types shared by the instance handlers
// Errors are answered as plain text, successful reads as JSON

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// Every way a request can be refused.
///
/// The `Display` text is the plain-text response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Authorization header missing")]
    Unauthenticated,
    #[error("")]
    Forbidden,
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();
        warn!(status = status.as_u16(), "Request rejected: {:?}", self);

        match self {
            // 403 carries no body at all
            ApiError::Forbidden => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// Serializes `value` into a 200 JSON response, or a 500 if encoding fails
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, ApiError> {
    let body: Vec<u8> = serde_json::to_vec(value).map_err(|err| {
        error!("Failed to encode response JSON: {:?}", err);
        ApiError::Internal
    })?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response())
}
