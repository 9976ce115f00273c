//! Application State
//!
//! 持有仓储端口与所有 Command/Query Handlers，启动时构建一次

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler,
    // Query handlers
    ListCategoriesHandler, ListCategoryQuestionsHandler, ListQuestionsHandler,
    NextQuizQuestionHandler, SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort, QuizRng,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub question_repo: Arc<dyn QuestionRepositoryPort>,
    pub category_repo: Arc<dyn CategoryRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
    pub list_category_questions_handler: ListCategoryQuestionsHandler,
    pub next_quiz_question_handler: NextQuizQuestionHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `quiz_rng` 为测验出题使用的随机源
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
        quiz_rng: QuizRng,
    ) -> Self {
        Self {
            question_repo: question_repo.clone(),
            category_repo: category_repo.clone(),

            create_question_handler: CreateQuestionHandler::new(question_repo.clone()),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),

            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            list_questions_handler: ListQuestionsHandler::new(
                question_repo.clone(),
                category_repo.clone(),
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo.clone()),
            list_category_questions_handler: ListCategoryQuestionsHandler::new(
                question_repo.clone(),
                category_repo,
            ),
            next_quiz_question_handler: NextQuizQuestionHandler::new(question_repo, quiz_rng),
        }
    }
}
