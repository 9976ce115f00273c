//! Question Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::{QuestionRepositoryPort, RepositoryError};
use crate::domain::trivia::NewQuestion;

// ============================================================================
// CreateQuestion
// ============================================================================

/// 创建题目响应
#[derive(Debug, Clone)]
pub struct CreateQuestionResponse {
    pub id: i64,
}

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl CreateQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 插入题目
    ///
    /// 存储层的任何失败都视为不可处理的请求（422），这是唯一捕获存储错误的路径
    pub async fn handle(
        &self,
        command: CreateQuestion,
    ) -> Result<CreateQuestionResponse, ApplicationError> {
        let new_question = NewQuestion::from(command);

        let id = self
            .question_repo
            .insert(&new_question)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Question insert rejected by storage");
                ApplicationError::Unprocessable(e.to_string())
            })?;

        tracing::info!(
            question_id = id,
            category = ?new_question.category,
            "Question created"
        );

        Ok(CreateQuestionResponse { id })
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, command: DeleteQuestion) -> Result<i64, ApplicationError> {
        let question = self
            .question_repo
            .find_by_id(command.question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", command.question_id))?;

        self.question_repo
            .delete(question.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Question", question.id),
                other => ApplicationError::from(other),
            })?;

        tracing::info!(question_id = question.id, "Question deleted");

        Ok(question.id)
    }
}
