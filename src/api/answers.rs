use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::schemas::answer::{AnswerResponse, AnswerSubmissionPayload};
use crate::services::answers::{self, AnswerSubmission};

#[derive(Debug, Deserialize)]
pub(crate) struct ListAnswersQuery {
    #[serde(default)]
    #[serde(alias = "studentId")]
    student_id: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/:quiz_id/answers", get(list_answers).post(submit_answers))
}

async fn submit_answers(
    Path(quiz_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<AnswerSubmissionPayload>,
) -> Result<Json<AnswerResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let submission = AnswerSubmission {
        quiz_id,
        student_id: payload.student_id,
        answers: payload.answers.unwrap_or_default(),
    };

    let record = answers::record_submission(
        state.store(),
        &state.settings().quiz().answer_keys,
        submission,
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to record quiz answers"))?;

    Ok(Json(AnswerResponse::from_record(record)))
}

async fn list_answers(
    Path(quiz_id): Path<String>,
    Query(params): Query<ListAnswersQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AnswerResponse>>, ApiError> {
    let records = match params.student_id.as_deref() {
        Some(student_id) => {
            state.store().query_by_quiz_and_student(&quiz_id, student_id).await
        }
        None => state.store().query_by_quiz(&quiz_id).await,
    }
    .map_err(|e| ApiError::internal(e, "Failed to fetch quiz answers"))?;

    Ok(Json(records.into_iter().map(AnswerResponse::from_record).collect()))
}
