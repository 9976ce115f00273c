//! Repository Ports - 出站端口
//!
//! 定义题库持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::trivia::{Category, NewQuestion, Question};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Question Repository
// ============================================================================

/// Question Repository Port
///
/// 所有列表查询均按 id 升序返回
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// 插入题目，返回新分配的 id
    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError>;

    /// 根据 ID 查找题目
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError>;

    /// 删除题目（硬删除）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// 题目总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 分页获取题目
    async fn find_page(&self, offset: u64, limit: u32) -> Result<Vec<Question>, RepositoryError>;

    /// 题干子串搜索（LIKE '%term%'）
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// 获取某分类下的所有题目
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError>;

    /// 测验候选题目：可选按分类过滤，已答题目由领域层排除
    async fn find_quiz_candidates(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<Question>, RepositoryError>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;
}
