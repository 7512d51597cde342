use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use crate::config::state::AppState;
use crate::utils::response_handler::ApiError;

/// Checks the caller credential against the single tenant key
pub fn authorize(headers: &HeaderMap, tenant_key: &str) -> Result<(), ApiError> {
    // An empty header counts as missing
    let credential: &[u8] = headers
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::Unauthenticated)?;

    if credential != tenant_key.as_bytes() {
        return Err(ApiError::Forbidden);
    }

    Ok(())
}

/// Middleware that rejects requests not carrying the tenant key
pub async fn tenant_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    authorize(&headers, state.tenant_key())?;

    tracing::debug!("Tenant credential accepted");

    Ok(next.run(request).await)
}
