//! Data Transfer Objects
//!
//! 多个 handler 共用的请求/响应结构

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::trivia::{Category, Question};

/// 题目的 JSON 表示
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

pub fn question_list(questions: Vec<Question>) -> Vec<QuestionResponse> {
    questions.into_iter().map(QuestionResponse::from).collect()
}

/// 分类 id -> 分类名，按 id 排序
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// 整数或数字字符串
///
/// 前端表单提交的 id/难度可能是字符串形式
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(v) => Some(*v),
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// 写操作成功响应
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_keys_serialize_as_strings() {
        let map = category_map(vec![Category::new(2, "Art"), Category::new(1, "Science")]);
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json["1"], "Science");
        assert_eq!(json["2"], "Art");
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_int_or_string() {
        let v: IntOrString = serde_json::from_str("3").unwrap();
        assert_eq!(v.as_i64(), Some(3));

        let v: IntOrString = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(v.as_i64(), Some(4));

        let v: IntOrString = serde_json::from_str("\"Science\"").unwrap();
        assert_eq!(v.as_i64(), None);
    }
}
