//! Route definitions for the read-only `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(projects::list))
}
