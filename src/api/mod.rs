//! HTTP front end for the navigator.
//!
//! - `POST /api/v1/robot/navigate`: run one navigation, `201` with the final report
//! - `GET /health`: liveness check, outside the versioned API

pub mod dto;
pub mod error;
pub mod logging;

use crate::error::ServiceError;
use crate::navigator;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use dto::{NavigateRequest, ReportResponse};
use error::ApiError;
use serde_json::Value;
use std::future::Future;
use tokio::net::TcpListener;

pub const NAVIGATE_PATH: &str = "/api/v1/robot/navigate";
pub const HEALTH_PATH: &str = "/health";

/// Builds the service's router with request logging applied.
pub fn router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(NAVIGATE_PATH, post(navigate))
        .fallback(not_found)
        .layer(middleware::from_fn(logging::log_requests))
}

/// Serves [`router`] on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServiceError> {
    let addr = listener.local_addr()?;
    tracing::info!("grid-robot HTTP server listening on http://{addr}");
    tracing::info!("Health check: GET {HEALTH_PATH}");
    tracing::info!("Navigate: POST {NAVIGATE_PATH} (JSON)");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("grid-robot HTTP server stopped");
    Ok(())
}

async fn health_check() -> &'static str {
    "Healthy"
}

async fn navigate(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportResponse>), ApiError> {
    let Json(body) = payload?;
    let input = NavigateRequest::from_body(body)
        .and_then(|request| request.validate())
        .map_err(ApiError::BadRequest)?;

    let pose = navigator::navigate(input.room_size, &input.start_position, &input.commands)?;
    Ok((StatusCode::CREATED, Json(pose.into())))
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {method} {}", uri.path()))
}
