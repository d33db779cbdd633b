#[cfg(test)]
mod memory;
mod pg;

use async_trait::async_trait;

use crate::db::models::QuizAnswer;

#[cfg(test)]
pub(crate) use memory::MemoryAnswerStore;
pub(crate) use pg::PgAnswerStore;

/// Keyed persistence for quiz answer records, addressable by quiz alone or by
/// the full (quiz, student) pair. Implementations hold no business rules; the
/// submission service decides what gets written.
#[async_trait]
pub(crate) trait AnswerStore: Send + Sync {
    /// Insert the record, or replace the stored answers and completion mark
    /// when the (quiz_id, student_id) pair already exists. An arrive_at that
    /// is already persisted stays untouched; callers supply it from a prior
    /// read because the store performs no merge logic.
    async fn upsert(&self, record: QuizAnswer) -> Result<(), sqlx::Error>;

    async fn query_by_quiz(&self, quiz_id: &str) -> Result<Vec<QuizAnswer>, sqlx::Error>;

    /// Zero or one record by the one-record-per-pair invariant; kept
    /// sequence-shaped to match `query_by_quiz`.
    async fn query_by_quiz_and_student(
        &self,
        quiz_id: &str,
        student_id: &str,
    ) -> Result<Vec<QuizAnswer>, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}
