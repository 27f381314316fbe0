//! Session navigation handlers.
//!
//! Routes:
//! - `GET /session`        — current view, generating flag, active design id
//! - `PUT /session/view`   — switch the active view
//! - `PUT /session/active` — select an archived design (switches to details)

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use signalforge_core::session::ViewState;
use signalforge_core::types::DesignId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/view", put(set_view))
        .route("/session/active", put(select_design))
}

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.studio.snapshot().await,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewRequest {
    pub view: ViewState,
}

/// PUT /api/v1/session/view
pub async fn set_view(
    State(state): State<AppState>,
    Json(input): Json<SetViewRequest>,
) -> AppResult<impl IntoResponse> {
    state.studio.set_view(input.view).await;
    Ok(Json(DataResponse {
        data: state.studio.snapshot().await,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDesignRequest {
    pub design_id: DesignId,
}

/// PUT /api/v1/session/active
///
/// Makes an archived design active and switches to the details view.
/// Responds with the selected design.
pub async fn select_design(
    State(state): State<AppState>,
    Json(input): Json<SelectDesignRequest>,
) -> AppResult<impl IntoResponse> {
    let design = state.studio.select(input.design_id).await?;
    Ok(Json(DataResponse { data: design }))
}
