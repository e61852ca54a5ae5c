pub mod authoring;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                 GET   showcase listing
///
/// /dev/projects             POST  reorder / remove / patch (development only)
/// /dev/image-order          POST  reorder a project's gallery (development only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/dev", authoring::router())
}
