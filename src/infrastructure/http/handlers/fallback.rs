//! Fallback Handler

use axum::http::Uri;

use crate::infrastructure::http::error::ApiError;

/// 未匹配的路由
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri))
}
