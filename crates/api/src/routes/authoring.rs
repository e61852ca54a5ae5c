//! Route definitions for the local authoring endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::authoring;
use crate::state::AppState;

/// Routes mounted at `/dev`.
///
/// ```text
/// POST   /projects                          -> update_projects
/// POST   /image-order                       -> reorder_images
/// ```
///
/// Other methods go through the authoring guard too: 405 in development,
/// the disabled-route 404 in production.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            post(authoring::update_projects).fallback(authoring::method_not_allowed),
        )
        .route(
            "/image-order",
            post(authoring::reorder_images).fallback(authoring::method_not_allowed),
        )
}
