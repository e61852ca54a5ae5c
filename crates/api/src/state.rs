use std::sync::Arc;

use folio_db::SharedStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Backend holding the projects document.
    pub storage: SharedStorage,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
