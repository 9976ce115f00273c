//! Ping Handler
//!
//! 健康检查，同时验证数据库可用

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub questions: u64,
}

pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let questions = state
        .question_repo
        .count()
        .await
        .map_err(|e| ApiError::Internal(format!("Database unavailable: {}", e)))?;

    Ok(Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        questions,
    }))
}
