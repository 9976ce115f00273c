//! Question Commands

use crate::domain::trivia::NewQuestion;

/// 创建题目命令
///
/// 字段不做校验，缺失字段由存储层约束拒绝
#[derive(Debug, Clone, Default)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl From<CreateQuestion> for NewQuestion {
    fn from(command: CreateQuestion) -> Self {
        NewQuestion {
            question: command.question,
            answer: command.answer,
            category: command.category,
            difficulty: command.difficulty,
        }
    }
}

/// 删除题目命令
#[derive(Debug, Clone)]
pub struct DeleteQuestion {
    pub question_id: i64,
}
