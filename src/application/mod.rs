//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（QuestionRepository、CategoryRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateQuestion,
    DeleteQuestion,
    // Handlers
    handlers::{CreateQuestionHandler, CreateQuestionResponse, DeleteQuestionHandler},
};

pub use error::ApplicationError;

pub use ports::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};

pub use queries::{
    ListCategories,
    ListCategoryQuestions,
    ListQuestions,
    NextQuizQuestion,
    SearchQuestions,
    // Handlers
    handlers::{
        quiz_rng, CategoryQuestions, ListCategoriesHandler, ListCategoryQuestionsHandler,
        ListQuestionsHandler, NextQuizQuestionHandler, QuestionPage, QuestionSearchResult,
        QuizRng, SearchQuestionsHandler,
    },
};
