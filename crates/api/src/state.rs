use std::sync::Arc;

use signalforge_studio::Studio;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Generation orchestrator and session state.
    pub studio: Arc<Studio>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
