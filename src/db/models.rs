use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::PrimitiveDateTime;

/// One record per (quiz_id, student_id) pair. `answers` always holds the
/// latest submitted sequence in submission order; `arrive_at` is stamped on
/// the first submission and never changes; `complete_at` reflects whether the
/// latest submission matched the quiz's reference key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct QuizAnswer {
    pub(crate) quiz_id: String,
    pub(crate) student_id: String,
    pub(crate) answers: Json<Vec<String>>,
    pub(crate) arrive_at: PrimitiveDateTime,
    pub(crate) complete_at: Option<PrimitiveDateTime>,
}
