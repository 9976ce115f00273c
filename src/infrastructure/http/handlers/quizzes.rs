//! Quiz HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::NextQuizQuestion;
use crate::domain::trivia::QuizScope;
use crate::infrastructure::http::dto::{IntOrString, QuestionResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRequest>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryRequest {
    #[serde(default)]
    pub id: Option<IntOrString>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// `question` 为 null 表示没有可出的题目
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<QuestionResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取下一道测验题
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let quiz_category = req
        .quiz_category
        .ok_or_else(|| ApiError::BadRequest("quiz_category is required".to_string()))?;

    let category_id = quiz_category
        .id
        .as_ref()
        .and_then(IntOrString::as_i64)
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "quiz_category.id must be an integer, got {:?} ({:?})",
                quiz_category.id, quiz_category.kind
            ))
        })?;

    let query = NextQuizQuestion {
        previous_questions: req.previous_questions,
        scope: QuizScope::from_category_id(category_id),
    };

    let question = state.next_quiz_question_handler.handle(query).await?;

    Ok(Json(QuizResponse {
        question: question.map(QuestionResponse::from),
    }))
}
