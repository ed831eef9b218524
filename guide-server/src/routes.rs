//! HTTP route handlers for the guide API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use guide::GuideError;
use guide::api;
use guide::model::{Resource, StepDetail, StepSummary};
use guide::progress::ProgressSummary;
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "interactive_home_buying_guide_backend";

/// Build the full application: health check at `/`, guide API under `/api`.
///
/// Only `/api` carries CORS. Requests from any other origin get no
/// `Access-Control-Allow-Origin` header.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([allowed_origin])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .nest("/api", api_router().layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/steps", get(list_steps))
        .route("/steps/{step_id}", get(get_step))
        .route(
            "/steps/{step_id}/checklist/{item_id}/toggle",
            post(toggle_item),
        )
        .route("/resources", get(list_resources))
        .route("/progress", get(get_progress))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

/// GET /api/steps - step summaries in display order.
async fn list_steps(State(state): State<AppState>) -> Json<Vec<StepSummary>> {
    let store = state.store.read().await;
    Json(api::list_steps(&store))
}

/// GET /api/steps/{step_id} - full step with its checklist.
async fn get_step(
    State(state): State<AppState>,
    Path(step_id): Path<String>,
) -> Result<Json<StepDetail>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(api::get_step_detail(&store, &step_id)?))
}

/// POST /api/steps/{step_id}/checklist/{item_id}/toggle - flip one item.
async fn toggle_item(
    State(state): State<AppState>,
    Path((step_id, item_id)): Path<(String, String)>,
) -> Result<Json<StepDetail>, ApiError> {
    let detail = {
        let mut store = state.store.write().await;
        api::toggle_checklist_item(&mut store, &step_id, &item_id)?
    };
    info!(
        step_id = %step_id,
        item_id = %item_id,
        completion = detail.completion,
        "checklist item toggled"
    );
    Ok(Json(detail))
}

/// GET /api/resources - static reading list.
async fn list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    let store = state.store.read().await;
    Json(api::list_resources(&store))
}

/// GET /api/progress - aggregate progress across all steps.
async fn get_progress(State(state): State<AppState>) -> Json<ProgressSummary> {
    let store = state.store.read().await;
    Json(api::get_progress(&store))
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Lookup failures rendered as `404 {"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(GuideError);

impl From<GuideError> for ApiError {
    fn from(err: GuideError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GuideError::StepNotFound { .. } | GuideError::ChecklistItemNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
