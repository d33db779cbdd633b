use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::QuizAnswer;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AnswerSubmissionPayload {
    #[serde(alias = "studentId")]
    #[validate(length(min = 1, message = "student_id must not be empty"))]
    pub(crate) student_id: String,
    /// Absent and empty both mean "no answers yet"; the handler collapses the
    /// two into one empty sequence.
    #[serde(default)]
    pub(crate) answers: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerResponse {
    pub(crate) quiz_id: String,
    pub(crate) student_id: String,
    pub(crate) answers: Vec<String>,
    pub(crate) arrive_at: String,
    pub(crate) complete_at: Option<String>,
}

impl AnswerResponse {
    pub(crate) fn from_record(record: QuizAnswer) -> Self {
        Self {
            quiz_id: record.quiz_id,
            student_id: record.student_id,
            answers: record.answers.0,
            arrive_at: format_primitive(record.arrive_at),
            complete_at: record.complete_at.map(format_primitive),
        }
    }
}
