//! Route registration.

pub mod designs;
pub mod health;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(designs::router())
        .merge(session::router())
}
