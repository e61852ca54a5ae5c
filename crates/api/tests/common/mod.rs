#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::{RuntimeMode, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::SharedStorage;

/// Three projects; `a` has a gallery, `c` carries an opaque field.
pub const ABC: &str = r#"[
  {
    "id": "a",
    "title": "Alpha",
    "category": "Web",
    "description": "First",
    "thumbnail": "/img/a.jpg",
    "images": [
      "1.jpg",
      "2.jpg",
      "3.jpg"
    ],
    "tags": [
      "React",
      "Three.js"
    ]
  },
  {
    "id": "b",
    "title": "Beta",
    "images": []
  },
  {
    "id": "c",
    "title": "Gamma",
    "customField": {
      "keep": true
    }
  }
]
"#;

/// Build a test `ServerConfig` pointing at `projects_path`.
pub fn test_config(projects_path: PathBuf, mode: RuntimeMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        projects_path,
        mode,
    }
}

/// A temp directory holding `data/projects.json` seeded with `contents`.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data").join("projects.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        Self { dir, path }
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.contents()).unwrap()
    }

    /// Build the full application router in `mode` over this fixture.
    pub fn app(&self, mode: RuntimeMode) -> Router {
        build_test_app(&self.path, mode)
    }
}

/// Build the full application router with all middleware layers over the
/// JSON document at `path`.
pub fn build_test_app(path: &Path, mode: RuntimeMode) -> Router {
    let storage: SharedStorage = folio_db::open_json_file(path);
    build_test_app_with_storage(storage, test_config(path.to_path_buf(), mode))
}

pub fn build_test_app_with_storage(storage: SharedStorage, config: ServerConfig) -> Router {
    let state = AppState {
        storage,
        config: Arc::new(config),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
