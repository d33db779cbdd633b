use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AnswerStore;
use crate::db::models::QuizAnswer;

/// In-memory store with the same contract as the Postgres one, used by unit
/// and router tests.
#[derive(Default)]
pub(crate) struct MemoryAnswerStore {
    records: RwLock<HashMap<(String, String), QuizAnswer>>,
}

#[async_trait]
impl AnswerStore for MemoryAnswerStore {
    async fn upsert(&self, record: QuizAnswer) -> Result<(), sqlx::Error> {
        let key = (record.quiz_id.clone(), record.student_id.clone());
        let mut records = self.records.write().await;

        match records.entry(key) {
            // Mirrors the conflict arm of the Postgres upsert: arrive_at is
            // never rewritten for an existing pair.
            Entry::Occupied(mut entry) => {
                let stored = entry.get_mut();
                stored.answers = record.answers;
                stored.complete_at = record.complete_at;
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }

        Ok(())
    }

    async fn query_by_quiz(&self, quiz_id: &str) -> Result<Vec<QuizAnswer>, sqlx::Error> {
        let records = self.records.read().await;
        Ok(records.values().filter(|record| record.quiz_id == quiz_id).cloned().collect())
    }

    async fn query_by_quiz_and_student(
        &self,
        quiz_id: &str,
        student_id: &str,
    ) -> Result<Vec<QuizAnswer>, sqlx::Error> {
        let records = self.records.read().await;
        Ok(records
            .get(&(quiz_id.to_string(), student_id.to_string()))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
