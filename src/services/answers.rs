use std::collections::HashMap;

use sqlx::types::Json;
use time::PrimitiveDateTime;

use crate::core::time::primitive_now_utc;
use crate::db::models::QuizAnswer;
use crate::repositories::answers::AnswerStore;
use crate::services::grading;

/// A normalized submission: missing answers have already been collapsed to an
/// empty sequence at the transport boundary.
#[derive(Debug, Clone)]
pub(crate) struct AnswerSubmission {
    pub(crate) quiz_id: String,
    pub(crate) student_id: String,
    pub(crate) answers: Vec<String>,
}

/// Record a submission as a read-then-write upsert against the store.
///
/// The first submission for a (quiz_id, student_id) pair stamps arrive_at;
/// every later one keeps the stored value. Answers are replaced wholesale and
/// the completion mark is re-derived from the latest answers only, so a
/// submission that no longer matches the reference key clears an earlier
/// complete_at. Storage failures propagate unchanged.
pub(crate) async fn record_submission(
    store: &dyn AnswerStore,
    answer_keys: &HashMap<String, Vec<String>>,
    submission: AnswerSubmission,
) -> Result<QuizAnswer, sqlx::Error> {
    let existing = store
        .query_by_quiz_and_student(&submission.quiz_id, &submission.student_id)
        .await?;

    let arrive_at =
        existing.into_iter().next().map(|record| record.arrive_at).unwrap_or_else(primitive_now_utc);

    let complete_at = completion_mark(&submission, answer_keys);

    let record = QuizAnswer {
        quiz_id: submission.quiz_id,
        student_id: submission.student_id,
        answers: Json(submission.answers),
        arrive_at,
        complete_at,
    };

    store.upsert(record.clone()).await?;

    tracing::info!(
        quiz_id = %record.quiz_id,
        student_id = %record.student_id,
        completed = record.complete_at.is_some(),
        "Quiz answers recorded"
    );

    Ok(record)
}

// A quiz without a registered reference key is stored but never completes.
fn completion_mark(
    submission: &AnswerSubmission,
    answer_keys: &HashMap<String, Vec<String>>,
) -> Option<PrimitiveDateTime> {
    let key = answer_keys.get(&submission.quiz_id)?;
    grading::satisfies_key(&submission.answers, key).then(primitive_now_utc)
}
