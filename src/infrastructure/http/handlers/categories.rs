//! Category HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{ListCategories, ListCategoryQuestions};
use crate::infrastructure::http::dto::{category_map, question_list, CategoryMap, QuestionResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: u64,
    pub current_category: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取所有分类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(CategoriesResponse {
        categories: category_map(categories),
    }))
}

/// 获取分类下的题目
///
/// 分类没有题目时返回 404
pub async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) =
        category_id.map_err(|e| ApiError::NotFound(format!("Invalid category id: {}", e)))?;

    let result = state
        .list_category_questions_handler
        .handle(ListCategoryQuestions { category_id })
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        questions: question_list(result.questions),
        total_questions: result.total_questions,
        current_category: result.current_category,
    }))
}
