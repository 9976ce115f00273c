//! Command Handlers 实现

mod question_handlers;

pub use question_handlers::*;
