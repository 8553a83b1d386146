//! Static documentation files served under `/doc`.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn router(doc_dir: &Path) -> Router<AppState> {
    Router::new().nest_service("/doc", ServeDir::new(doc_dir))
}
