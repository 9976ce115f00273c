//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Trivia Context: 题库与测验

pub mod trivia;
