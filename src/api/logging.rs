//! Request logging middleware.

use super::HEALTH_PATH;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Logs the start and outcome of every request.
///
/// Successful health checks are not logged on completion.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    debug!("{method} START {path}");
    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        warn!("{method} {} FINISH {path} {elapsed_ms}ms", status.as_u16());
    } else if path != HEALTH_PATH {
        info!("{method} {} FINISH {path} {elapsed_ms}ms", status.as_u16());
    }

    response
}
