use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::SwiftCodeService;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the service
/// holds only a pool handle. The service is constructed once at startup
/// and threaded through every call; there is no process-wide store
/// singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks and startup tasks).
    pub pool: swiftreg_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Registry query service.
    pub service: SwiftCodeService,
}
