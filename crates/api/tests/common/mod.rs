//! Shared helpers for API integration tests.
//!
//! Builds the full application router with the production middleware stack
//! but a scripted [`ConceptGenerator`], so no test touches the network.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use async_trait::async_trait;
use signalforge_api::config::ServerConfig;
use signalforge_api::routes;
use signalforge_api::state::AppState;
use signalforge_core::error::GenerationError;
use signalforge_core::generator::ConceptGenerator;
use signalforge_core::image_ref;
use signalforge_core::params::GenerationParameters;
use signalforge_core::spec_sheet::SpecificationSheet;
use signalforge_studio::Studio;

/// Base64 payload of a 1x1 PNG, used as the scripted image reply.
pub const PNG_1X1_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Scripted [`ConceptGenerator`]: serves a fixed image outcome and sheet.
pub struct ScriptedGenerator {
    fail_image: bool,
    sheet: SpecificationSheet,
}

impl ScriptedGenerator {
    /// Image succeeds with a 1x1 PNG; sheet is a fully populated reply.
    pub fn happy() -> Self {
        Self {
            fail_image: false,
            sheet: SpecificationSheet {
                dimensions: "320mm x 220mm x 80mm".to_string(),
                cooling_solution: "外露式压铸散热鳍片".to_string(),
                ip_rating: "IP67".to_string(),
                material_composition: "压铸铝 + 防腐涂层".to_string(),
                connector_type: "N-Female x2".to_string(),
                estimated_weight: "3.1kg".to_string(),
                marketing_tagline: "深山旷野，一杆通联。".to_string(),
            },
        }
    }

    /// The image capability errors; the attempt must abort.
    pub fn image_failure() -> Self {
        Self {
            fail_image: true,
            ..Self::happy()
        }
    }

    /// The sheet capability degraded to the fallback (as the real client
    /// does for malformed replies); the image still succeeds.
    pub fn degraded_sheet() -> Self {
        Self {
            fail_image: false,
            sheet: SpecificationSheet::fallback(),
        }
    }
}

#[async_trait]
impl ConceptGenerator for ScriptedGenerator {
    async fn concept_image(
        &self,
        _params: &GenerationParameters,
    ) -> Result<String, GenerationError> {
        if self.fail_image {
            Err(GenerationError::ImageUnavailable("upstream 500".to_string()))
        } else {
            Ok(image_ref::png_data_uri(PNG_1X1_BASE64))
        }
    }

    async fn specification_sheet(&self, _params: &GenerationParameters) -> SpecificationSheet {
        self.sheet.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given scripted generator.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(generator: ScriptedGenerator) -> Router {
    let config = test_config();
    let studio = Arc::new(Studio::new(Arc::new(generator)));

    let state = AppState {
        studio,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---- request helpers ----

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Issue a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// The parameter submission used across scenario tests.
pub fn scenario_params() -> serde_json::Value {
    serde_json::json!({
        "deviceCategory": "户外抱杆式中继器",
        "material": "拉丝铝合金",
        "style": "重工业风 (外露散热片)",
        "detailText": ""
    })
}
