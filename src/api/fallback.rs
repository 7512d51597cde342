// Start of file: /src/api/fallback.rs

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
};

use crate::api::instances::{routes::INSTANCE_PATH_PREFIX, validation::parse_id};
use crate::api::middleware::authorize;
use crate::config::state::AppState;
use crate::utils::response_handler::ApiError;

/*
    * Catches every request no route matched. Paths under `/instances/` that the
    * `{id}` template cannot match (empty or nested segments) still get the
    * authorization and id checks of the instance routes.
*/
pub async fn fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> ApiError {
    let Some(raw_id) = uri.path().strip_prefix(INSTANCE_PATH_PREFIX) else {
        return ApiError::NotFound;
    };

    if !matches!(method, Method::GET | Method::PATCH | Method::DELETE) {
        return ApiError::NotFound;
    }

    if let Err(err) = authorize(&headers, state.tenant_key()) {
        return err;
    }

    match parse_id(raw_id) {
        Err(err) => err,
        // A well-formed id would have matched the `{id}` route
        Ok(_) => ApiError::NotFound,
    }
}

// End of file: /src/api/fallback.rs
