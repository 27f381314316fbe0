//! Handlers for design generation, archive reads, and export.
//!
//! Routes:
//! - `POST /designs/generate`    — run one generation attempt
//! - `GET  /designs`             — the archive, newest first
//! - `GET  /designs/{id}`        — one archived design
//! - `GET  /designs/{id}/export` — download the render as a PNG attachment
//! - `GET  /dashboard`           — design count plus the three newest designs
//! - `GET  /options`             — the closed parameter sets for the form

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use signalforge_core::design::GenerationResult;
use signalforge_core::image_ref;
use signalforge_core::params::{DesignStyle, DeviceCategory, GenerationParameters, Material};
use signalforge_core::types::DesignId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/designs/generate", post(generate))
        .route("/designs", get(list_designs))
        .route("/designs/{id}", get(get_design))
        .route("/designs/{id}/export", get(export_design))
        .route("/dashboard", get(dashboard))
        .route("/options", get(options))
}

/// POST /api/v1/designs/generate
///
/// Runs one generation attempt. On success the new design is already
/// archived and active; the response carries it in full. While an attempt
/// is in flight, further submissions are rejected with a conflict.
pub async fn generate(
    State(state): State<AppState>,
    Json(params): Json<GenerationParameters>,
) -> AppResult<impl IntoResponse> {
    let design = state.studio.generate(params).await?;
    Ok(Json(DataResponse { data: design }))
}

/// GET /api/v1/designs
pub async fn list_designs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let designs = state.studio.designs().await;
    Ok(Json(DataResponse { data: designs }))
}

/// GET /api/v1/designs/{id}
pub async fn get_design(
    State(state): State<AppState>,
    Path(id): Path<DesignId>,
) -> AppResult<impl IntoResponse> {
    let design = state.studio.design(id).await?;
    Ok(Json(DataResponse { data: design }))
}

/// GET /api/v1/designs/{id}/export
///
/// Serves the stored render as a PNG attachment named after the design id.
pub async fn export_design(
    State(state): State<AppState>,
    Path(id): Path<DesignId>,
) -> AppResult<impl IntoResponse> {
    let design = state.studio.design(id).await?;

    let bytes = image_ref::decode_data_uri(&design.image_ref)
        .map_err(|e| AppError::InternalError(format!("Stored image reference is unreadable: {e}")))?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", design.export_filename()),
        ),
    ];
    Ok((headers, bytes))
}

/// Dashboard summary payload: project count plus the newest designs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub design_count: usize,
    pub recent: Vec<GenerationResult>,
}

/// Number of designs shown on the dashboard.
const DASHBOARD_RECENT_COUNT: usize = 3;

/// GET /api/v1/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = DashboardSummary {
        design_count: state.studio.design_count().await,
        recent: state.studio.recent(DASHBOARD_RECENT_COUNT).await,
    };
    Ok(Json(DataResponse { data: summary }))
}

/// The closed parameter sets the generator form offers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterOptions {
    pub device_categories: Vec<DeviceCategory>,
    pub materials: Vec<Material>,
    pub styles: Vec<DesignStyle>,
}

/// GET /api/v1/options
pub async fn options() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ParameterOptions {
            device_categories: DeviceCategory::ALL.to_vec(),
            materials: Material::ALL.to_vec(),
            styles: DesignStyle::ALL.to_vec(),
        },
    }))
}
