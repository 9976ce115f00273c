//! Trivia Context - 题库限界上下文
//!
//! 职责:
//! - 题目与分类实体
//! - 题目列表分页
//! - 测验出题（排除已答题目，随机抽取）

mod entities;
mod pagination;
mod quiz;

pub use entities::{Category, NewQuestion, Question};
pub use pagination::{PageRequest, QUESTIONS_PER_PAGE};
pub use quiz::{pick_question, QuizScope, ANY_CATEGORY};
