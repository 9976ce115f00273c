//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{QuestionRepositoryPort, RepositoryError};
use crate::domain::trivia::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: String,
    difficulty: i64,
}

impl TryFrom<QuestionRow> for Question {
    type Error = RepositoryError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let category = row.category.trim().parse::<i64>().map_err(|e| {
            RepositoryError::SerializationError(format!(
                "question {} has non-numeric category {:?}: {}",
                row.id, row.category, e
            ))
        })?;

        Ok(Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category,
            difficulty: row.difficulty,
        })
    }
}

fn map_db_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if !matches!(db.kind(), sqlx::error::ErrorKind::Other) => {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(question.question.as_deref())
        .bind(question.answer.as_deref())
        .bind(question.category.map(|c| c.to_string()))
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError> {
        let row: Option<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Question::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("question {}", id)));
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }

    async fn find_page(&self, offset: u64, limit: u32) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions ORDER BY id LIMIT ? OFFSET ?",
            QUESTION_COLUMNS
        ))
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Question::try_from).collect()
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        // instr 区分大小写；空字符串匹配所有题目
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE instr(question, ?) > 0 ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Question::try_from).collect()
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Question::try_from).collect()
    }

    async fn find_quiz_candidates(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<Question>, RepositoryError> {
        match category_id {
            Some(category_id) => self.find_by_category(category_id).await,
            None => {
                let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
                    "SELECT {} FROM questions ORDER BY id",
                    QUESTION_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                rows.into_iter().map(Question::try_from).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteQuestionRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteQuestionRepository::new(pool)
    }

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_string()),
            answer: Some("answer".to_string()),
            category: Some(category),
            difficulty: Some(2),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = repo().await;
        let id = repo.insert(&new_question("What is H2O?", 1)).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.question, "What is H2O?");
        assert_eq!(found.category, 1);
        assert_eq!(found.difficulty, 2);
    }

    #[tokio::test]
    async fn test_insert_missing_field_is_constraint_violation() {
        let repo = repo().await;
        let mut question = new_question("No answer", 1);
        question.answer = None;

        let err = repo.insert(&question).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = repo().await;
        let id = repo.insert(&new_question("Temporary", 1)).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let repo = repo().await;
        let first = repo.insert(&new_question("First", 1)).await.unwrap();
        repo.delete(first).await.unwrap();

        let second = repo.insert(&new_question("Second", 1)).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_find_page_orders_by_id() {
        let repo = repo().await;
        for i in 0..12 {
            repo.insert(&new_question(&format!("Q{}", i), 1)).await.unwrap();
        }

        let first = repo.find_page(0, 10).await.unwrap();
        let second = repo.find_page(10, 10).await.unwrap();
        let third = repo.find_page(20, 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 2);
        assert!(third.is_empty());
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(repo.count().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive_substring() {
        let repo = repo().await;
        repo.insert(&new_question("What is the capital?", 3)).await.unwrap();
        repo.insert(&new_question("Known as what?", 2)).await.unwrap();
        repo.insert(&new_question("Who painted it?", 2)).await.unwrap();

        let hits = repo.search("What").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].question.contains("What"));

        assert_eq!(repo.search("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_quiz_candidates_filters_by_category() {
        let repo = repo().await;
        let a = repo.insert(&new_question("A", 1)).await.unwrap();
        let b = repo.insert(&new_question("B", 1)).await.unwrap();
        let c = repo.insert(&new_question("C", 2)).await.unwrap();

        let all = repo.find_quiz_candidates(None).await.unwrap();
        assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a, b, c]);

        let scoped = repo.find_quiz_candidates(Some(1)).await.unwrap();
        assert_eq!(scoped.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a, b]);

        assert!(repo.find_quiz_candidates(Some(5)).await.unwrap().is_empty());
    }
}
