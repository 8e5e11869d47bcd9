use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::domain::{SurveyId, SurveySubmission};
use super::service::{SurveyService, SurveyServiceError};
use super::store::{StoreError, SurveyStore};

pub(crate) const NO_SURVEYS_MESSAGE: &str = "No Surveys Available.";
const SUBMISSION_FAILED_MESSAGE: &str = "An error occurred during survey submission.";
const ANALYTICS_FAILED_MESSAGE: &str = "Failed to fetch analytics.";
const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch survey responses.";

/// Router exposing survey intake, lookup, and analytics endpoints.
pub fn survey_router<S>(service: Arc<SurveyService<S>>) -> Router
where
    S: SurveyStore + 'static,
{
    Router::new()
        .route(
            "/api/surveys",
            get(list_handler::<S>).post(submit_handler::<S>),
        )
        .route("/api/surveys/analytics", get(analytics_handler::<S>))
        .route("/api/surveys/:survey_id", get(survey_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SurveyService<S>>>,
    Json(submission): Json<SurveySubmission>,
) -> Response
where
    S: SurveyStore + 'static,
{
    match service.submit(submission) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(SurveyServiceError::Validation(err)) => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(SurveyServiceError::Store(err)) => {
            error!(error = %err, "survey submission failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SUBMISSION_FAILED_MESSAGE)
        }
    }
}

pub(crate) async fn analytics_handler<S>(State(service): State<Arc<SurveyService<S>>>) -> Response
where
    S: SurveyStore + 'static,
{
    match service.analytics() {
        Ok(Some(analytics)) => (StatusCode::OK, Json(analytics)).into_response(),
        Ok(None) => (StatusCode::OK, Json(json!({ "message": NO_SURVEYS_MESSAGE }))).into_response(),
        Err(err) => {
            error!(error = %err, "analytics computation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ANALYTICS_FAILED_MESSAGE)
        }
    }
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<SurveyService<S>>>) -> Response
where
    S: SurveyStore + 'static,
{
    match service.list() {
        Ok(surveys) => (StatusCode::OK, Json(surveys)).into_response(),
        Err(err) => {
            error!(error = %err, "survey listing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED_MESSAGE)
        }
    }
}

pub(crate) async fn survey_handler<S>(
    State(service): State<Arc<SurveyService<S>>>,
    Path(survey_id): Path<String>,
) -> Response
where
    S: SurveyStore + 'static,
{
    let Ok(uuid) = Uuid::parse_str(survey_id.trim()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!("'{survey_id}' is not a valid survey id"),
        );
    };

    match service.get(&SurveyId(uuid)) {
        Ok(survey) => (StatusCode::OK, Json(survey)).into_response(),
        Err(SurveyServiceError::Store(StoreError::NotFound(id))) => {
            error_response(StatusCode::NOT_FOUND, &format!("Survey response {id} not found."))
        }
        Err(err) => {
            error!(error = %err, "survey lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED_MESSAGE)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
