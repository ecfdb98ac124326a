use std::time::Duration;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;
use crate::utils::AppError;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Requests still running after `timeout` get 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(http::StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn not_found(uri: http::Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Site
        .merge(crate::api::pages::router())
        .merge(crate::api::health::router())
        // Intake
        .merge(crate::api::reservations::router())
        .merge(crate::api::contact::router())
        // Content
        .merge(crate::api::menu::router())
        .fallback(not_found)
}

/// Full application: routes, static assets and the middleware stack
pub fn build_router(state: ServerState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    let timeout = state.config.request_timeout();

    build_app()
        .nest_service("/assets", assets)
        .with_state(state)
        // Tower HTTP 中间件
        .layer(timeout_layer(timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
