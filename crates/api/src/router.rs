//! Application router: the resource routes wrapped in the HTTP middleware
//! stack. `main.rs` and the integration tests both build through
//! [`build_app_router`].

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// CORS preflight cache lifetime.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Mount every route at the root and wrap it in middleware.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    with_middleware(routes::api_routes(), config).with_state(state)
}

/// Layers run outside-in in reverse order of the calls below: CORS, then
/// request id assignment, tracing, request id propagation onto the
/// response, the 408 timeout, and finally panic recovery around the
/// handler.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(trace)
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS for the configured frontend origins.
///
/// The frontend only reads and posts JSON, and may read the request id
/// back from responses.
///
/// # Panics
///
/// When a configured origin is not a valid header value. This runs once
/// at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins.iter().map(|origin| {
        HeaderValue::from_str(origin)
            .unwrap_or_else(|err| panic!("Invalid CORS origin '{origin}': {err}"))
    });

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([REQUEST_ID])
        .max_age(PREFLIGHT_MAX_AGE)
}
