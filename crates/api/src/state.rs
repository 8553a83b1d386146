use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the database handle is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway: connection pool plus the process-wide write lock.
    pub db: swapi_db::Database,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
