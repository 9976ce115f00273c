//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{ListCategoryQuestions, ListQuestions, SearchQuestions};
use crate::domain::trivia::{Category, Question};

// ============================================================================
// Response DTOs
// ============================================================================

/// 分页题目列表
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// 未分页的题目总数
    pub total_questions: u64,
    pub categories: Vec<Category>,
}

/// 搜索结果
#[derive(Debug, Clone)]
pub struct QuestionSearchResult {
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// 分类下的题目
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    pub async fn handle(&self, query: ListQuestions) -> Result<QuestionPage, ApplicationError> {
        let total_questions = self.question_repo.count().await?;

        // 越界页返回空列表而不是错误
        let questions = match query.page.offset() {
            Some(offset) if offset < total_questions => {
                self.question_repo
                    .find_page(offset, query.page.limit())
                    .await?
            }
            _ => Vec::new(),
        };

        let categories = self.category_repo.find_all().await?;

        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
        })
    }
}

/// SearchQuestions Handler
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        query: SearchQuestions,
    ) -> Result<QuestionSearchResult, ApplicationError> {
        let questions = self.question_repo.search(&query.search_term).await?;

        Ok(QuestionSearchResult {
            total_questions: questions.len() as u64,
            questions,
        })
    }
}

/// ListCategoryQuestions Handler
pub struct ListCategoryQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoryQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// 分类存在但没有题目时同样返回 NotFound
    pub async fn handle(
        &self,
        query: ListCategoryQuestions,
    ) -> Result<CategoryQuestions, ApplicationError> {
        let questions = self
            .question_repo
            .find_by_category(query.category_id)
            .await?;

        if questions.is_empty() {
            return Err(ApplicationError::not_found("Category questions", query.category_id));
        }

        let category = self
            .category_repo
            .find_by_id(query.category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", query.category_id))?;

        Ok(CategoryQuestions {
            total_questions: questions.len() as u64,
            questions,
            current_category: category.kind,
        })
    }
}
