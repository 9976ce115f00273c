//! Question Queries

use crate::domain::trivia::PageRequest;

/// 分页列出题目查询
#[derive(Debug, Clone, Default)]
pub struct ListQuestions {
    pub page: PageRequest,
}

/// 题干搜索查询
#[derive(Debug, Clone, Default)]
pub struct SearchQuestions {
    pub search_term: String,
}

/// 按分类列出题目查询
#[derive(Debug, Clone)]
pub struct ListCategoryQuestions {
    pub category_id: i64,
}
