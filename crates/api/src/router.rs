//! Application router: route tree, shared middleware and mode-aware CORS.
//!
//! [`build_app_router`] is used by both the binary and the integration tests
//! so they serve the same stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{RuntimeMode, ServerConfig};
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the portfolio API.
///
/// `/health` sits at the root, everything else under `/api`. Unknown paths
/// answer the same JSON 404 as a disabled authoring route, so production
/// responses do not reveal which `/api/dev` paths exist.
///
/// Layers, outermost first: CORS, request id, tracing, request id
/// propagation, timeout, panic recovery.
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .fallback(unknown_route)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(&config))
        .with_state(state)
}

async fn unknown_route() -> Response {
    AppError::Disabled.into_response()
}

/// Methods a browser may use cross-origin in `mode`.
///
/// Production only serves reads, so POST is not offered to preflights.
pub fn cors_methods(mode: RuntimeMode) -> Vec<Method> {
    if mode.allows_authoring() {
        vec![Method::GET, Method::POST]
    } else {
        vec![Method::GET]
    }
}

/// CORS for the configured origins and the runtime mode's methods.
///
/// Panics at startup on an unparsable origin.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(cors_methods(config.mode))
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
