//! Trivia Context - Pagination
//!
//! 基于偏移量的分页：页码从 1 开始，每页固定 10 条

/// 每页题目数
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// 分页请求
///
/// 页码小于 1 时视为越界，返回空页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// 从查询参数解析页码，无法解析时回退到第 1 页
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// SQL OFFSET，越界页返回 None
    pub fn offset(&self) -> Option<u64> {
        if self.page < 1 {
            return None;
        }
        (self.page as u64 - 1).checked_mul(QUESTIONS_PER_PAGE as u64)
    }

    /// SQL LIMIT
    pub fn limit(&self) -> u32 {
        QUESTIONS_PER_PAGE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}
