//! Handlers for the read-only `/projects` resource.

use axum::extract::State;
use axum::Json;
use folio_core::project::Project;
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/projects
///
/// The showcase in display order. Served in every runtime mode.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(state.storage.as_ref()).await?;
    Ok(Json(DataResponse { data: projects }))
}
