use async_trait::async_trait;
use sqlx::PgPool;

use super::AnswerStore;
use crate::db::models::QuizAnswer;

const COLUMNS: &str = "quiz_id, student_id, answers, arrive_at, complete_at";

pub(crate) struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn upsert(&self, record: QuizAnswer) -> Result<(), sqlx::Error> {
        // arrive_at is only written on insert; the conflict arm rewrites the
        // replaceable fields.
        sqlx::query(
            "INSERT INTO quiz_answers (quiz_id, student_id, answers, arrive_at, complete_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (quiz_id, student_id) DO UPDATE
             SET answers = EXCLUDED.answers,
                 complete_at = EXCLUDED.complete_at",
        )
        .bind(&record.quiz_id)
        .bind(&record.student_id)
        .bind(&record.answers)
        .bind(record.arrive_at)
        .bind(record.complete_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn query_by_quiz(&self, quiz_id: &str) -> Result<Vec<QuizAnswer>, sqlx::Error> {
        sqlx::query_as::<_, QuizAnswer>(&format!(
            "SELECT {COLUMNS}
             FROM quiz_answers
             WHERE quiz_id = $1"
        ))
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn query_by_quiz_and_student(
        &self,
        quiz_id: &str,
        student_id: &str,
    ) -> Result<Vec<QuizAnswer>, sqlx::Error> {
        sqlx::query_as::<_, QuizAnswer>(&format!(
            "SELECT {COLUMNS}
             FROM quiz_answers
             WHERE quiz_id = $1 AND student_id = $2"
        ))
        .bind(quiz_id)
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
