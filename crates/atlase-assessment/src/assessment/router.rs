use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::TechnologyLandscape;
use super::domain::{AnswerRecord, CostInputs, UserInfo};
use super::repository::AssessmentRepository;
use super::service::{
    AssessmentOutcome, AssessmentService, AssessmentServiceError, SaveDisposition,
};

/// Router builder exposing the assessment, catalog, and admin endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R>))
        .route("/api/v1/questions", get(questions_handler::<R>))
        .route(
            "/api/v1/technology-landscape",
            get(technology_landscape_handler),
        )
        .route("/api/v1/admin/assessments", get(list_handler::<R>))
        .route(
            "/api/v1/admin/assessments/:email",
            get(by_email_handler::<R>),
        )
        .route("/api/v1/admin/stats", get(stats_handler::<R>))
        .with_state(service)
}

/// Submission payload. Both collections are required; they stay optional here
/// so their absence maps to a 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessRequest {
    #[serde(default)]
    pub(crate) responses: Option<Vec<AnswerRecord>>,
    #[serde(default)]
    pub(crate) cost_inputs: Option<CostInputs>,
    #[serde(default)]
    pub(crate) user_info: Option<UserInfo>,
}

/// Persistence note attached to a successful submission response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<u64>,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessResponse {
    #[serde(flatten)]
    pub(crate) outcome: AssessmentOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) save_result: Option<SaveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) save_error: Option<String>,
}

impl AssessResponse {
    pub(crate) fn new(outcome: AssessmentOutcome, disposition: SaveDisposition) -> Self {
        let (save_result, save_error) = match disposition {
            SaveDisposition::Saved { id, email } => (
                Some(SaveResult {
                    id: Some(id),
                    message: "Assessment saved successfully".to_string(),
                    email: Some(email),
                }),
                None,
            ),
            SaveDisposition::Skipped { email } => (
                Some(SaveResult {
                    id: None,
                    message: "Address is on the storage skip list - data not saved".to_string(),
                    email: Some(email),
                }),
                None,
            ),
            SaveDisposition::NotRequested => (None, None),
            SaveDisposition::Failed(reason) => (None, Some(reason)),
        };

        Self {
            outcome,
            save_result,
            save_error,
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<AssessRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let (responses, cost_inputs) = match (request.responses, request.cost_inputs) {
        (Some(responses), Some(cost_inputs)) => (responses, cost_inputs),
        _ => {
            let payload = json!({ "error": "missing required data" });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };
    let user_info = request.user_info.unwrap_or_default();

    match service.submit(&responses, &cost_inputs, user_info) {
        Ok((outcome, disposition)) => {
            let body = AssessResponse::new(outcome, disposition);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(AssessmentServiceError::Scoring(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    axum::Json(service.catalog().clone()).into_response()
}

pub(crate) async fn technology_landscape_handler() -> Response {
    axum::Json(TechnologyLandscape::standard()).into_response()
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.list_all() {
        Ok(records) => axum::Json(records).into_response(),
        Err(error) => repository_failure(error),
    }
}

pub(crate) async fn by_email_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(email): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.list_by_email(&email) {
        Ok(records) => axum::Json(records).into_response(),
        Err(error) => repository_failure(error),
    }
}

pub(crate) async fn stats_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.stats() {
        Ok(stats) => axum::Json(stats).into_response(),
        Err(error) => repository_failure(error),
    }
}

fn repository_failure(error: AssessmentServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
