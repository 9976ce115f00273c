//! Trivia Context - Entities

use serde::{Deserialize, Serialize};

/// 题目分类（参考数据，不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// 题目实体
///
/// 不变量:
/// - id 由存储层分配，删除后不会复用
/// - 创建后不可修改，只能删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Question {
    /// 是否属于指定分类
    pub fn belongs_to(&self, category_id: i64) -> bool {
        self.category == category_id
    }
}

/// 待插入的题目
///
/// 字段均可缺省，缺失字段由存储层的 NOT NULL 约束拒绝
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}
