//! Guard for the local authoring routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the server runs in local authoring mode.
///
/// In production the extractor rejects with [`AppError::Disabled`], which
/// answers 404 like an unknown route. Place it before any body extractor so
/// production never reads or validates the body.
///
/// ```ignore
/// async fn edit(_local: LocalAuthoring, JsonBody(body): JsonBody<Value>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalAuthoring;

impl FromRequestParts<AppState> for LocalAuthoring {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.config.mode.allows_authoring() {
            return Ok(LocalAuthoring);
        }
        tracing::debug!(
            method = %parts.method,
            path = %parts.uri.path(),
            mode = %state.config.mode,
            "Authoring route disabled",
        );
        Err(AppError::Disabled)
    }
}
