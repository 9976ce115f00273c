//! Quiz Queries

use crate::domain::trivia::QuizScope;

/// 获取下一道测验题
///
/// 已答题目列表由客户端维护，每次请求都需带上
#[derive(Debug, Clone)]
pub struct NextQuizQuestion {
    pub previous_questions: Vec<i64>,
    pub scope: QuizScope,
}
