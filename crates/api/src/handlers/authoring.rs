//! Handlers for the local authoring routes under `/dev`.
//!
//! Every handler takes [`LocalAuthoring`] first, so production answers 404
//! before the body is read.

use axum::extract::State;
use axum::http::header::ALLOW;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::requests::{ProjectCommand, ReorderImages};
use folio_db::repositories::ProjectRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::local_only::LocalAuthoring;
use crate::response::{ImageOrderAck, PatchAck, ReorderAck};
use crate::state::AppState;

/// POST /api/dev/projects
///
/// Reorders the collection (`orderedIds`, optional `removeId`) or, when the
/// body carries `updateProjectId`, patches that project's display fields.
pub async fn update_projects(
    _local: LocalAuthoring,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Response> {
    let command = ProjectCommand::from_value(body).map_err(AppError::BadRequest)?;

    match command {
        ProjectCommand::Reorder(input) => {
            let ids = ProjectRepo::reorder(state.storage.as_ref(), &input).await?;
            Ok(Json(ReorderAck { ok: true, ids }).into_response())
        }
        ProjectCommand::Patch(input) => {
            let id = ProjectRepo::patch(state.storage.as_ref(), &input).await?;
            Ok(Json(PatchAck { ok: true, id }).into_response())
        }
    }
}

/// POST /api/dev/image-order
///
/// Reorders one project's gallery. Images the project does not have are
/// ignored; images the request omits are kept at the end.
pub async fn reorder_images(
    _local: LocalAuthoring,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ReorderImages>,
) -> AppResult<Json<ImageOrderAck>> {
    let images = ProjectRepo::reorder_images(state.storage.as_ref(), &input).await?;
    Ok(Json(ImageOrderAck { ok: true, images }))
}

/// Any non-POST method on an authoring route.
pub async fn method_not_allowed(_local: LocalAuthoring) -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, "POST")]).into_response()
}
