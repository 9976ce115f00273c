//! Question HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{CreateQuestion, DeleteQuestion, ListQuestions, SearchQuestions};
use crate::domain::trivia::PageRequest;
use crate::infrastructure::http::dto::{
    category_map, question_list, CategoryMap, IntOrString, QuestionResponse, SuccessResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 查询串按原始键值对接收，重复的 `page` 取第一个
pub type ListQuestionsParams = Vec<(String, String)>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: u64,
    pub categories: CategoryMap,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<IntOrString>,
    #[serde(default)]
    pub category: Option<IntOrString>,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
    pub deleted: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: u64,
}

/// 整数字段转换，非数字字符串视为存储层无法接受的数据
fn integer_field(name: &str, value: Option<IntOrString>) -> Result<Option<i64>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| {
            ApiError::UnprocessableEntity(format!("{} must be an integer, got {:?}", name, v))
        }),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 分页获取题目（每页 10 条）
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListQuestionsParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let page = params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());

    let query = ListQuestions {
        page: PageRequest::parse(page),
    };

    let result = state.list_questions_handler.handle(query).await?;

    Ok(Json(QuestionsResponse {
        questions: question_list(result.questions),
        total_questions: result.total_questions,
        categories: category_map(result.categories),
    }))
}

/// 创建题目
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<CreatedQuestion>>), ApiError> {
    let Json(req) = payload.map_err(|rejection| match rejection {
        // JSON 语法正确但字段类型不符
        JsonRejection::JsonDataError(e) => ApiError::UnprocessableEntity(e.body_text()),
        other => ApiError::BadRequest(other.body_text()),
    })?;

    let command = CreateQuestion {
        question: req.question,
        answer: req.answer,
        difficulty: integer_field("difficulty", req.difficulty)?,
        category: integer_field("category", req.category)?,
    };

    let result = state.create_question_handler.handle(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(CreatedQuestion { id: result.id })),
    ))
}

/// 删除题目
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse<DeletedQuestion>>, ApiError> {
    let Path(question_id) =
        question_id.map_err(|e| ApiError::NotFound(format!("Invalid question id: {}", e)))?;

    let deleted = state
        .delete_question_handler
        .handle(DeleteQuestion { question_id })
        .await?;

    Ok(Json(SuccessResponse::new(DeletedQuestion { deleted })))
}

/// 按题干搜索题目（不分页）
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<SearchQuestionsResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let query = SearchQuestions {
        search_term: req.search_term.unwrap_or_default(),
    };

    let result = state.search_questions_handler.handle(query).await?;

    Ok(Json(SearchQuestionsResponse {
        questions: question_list(result.questions),
        total_questions: result.total_questions,
    }))
}
