// Start of file: /src/utils/request_logger.rs

use std::{convert::Infallible, time::Instant};
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
};
use tracing::{error, info, warn};

/*
    * Logs method, path, status and latency of every request.
*/
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let status: StatusCode = response.status();
    let elapsed_ms: f64 = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else if status.is_client_error() {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request rejected");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, "request served");
    }

    Ok(response)
}

// End of file: /src/utils/request_logger.rs
