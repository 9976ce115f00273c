//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod category_handlers;
mod question_handlers;
mod quiz_handlers;

pub use category_handlers::*;
pub use question_handlers::*;
pub use quiz_handlers::*;
