//! HTTP Middleware
//!
//! 状态码日志 + 405 响应体改写

use axum::{
    extract::Request,
    http::{header::ALLOW, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::{ApiError, LoggedError};

/// 错误日志与响应体统一中间件
///
/// - `ApiError` 产生的响应已带详情日志，这里不再重复记录
/// - 其余 4xx 记录 warn，5xx 记录 error
/// - 路由层产生的 405 没有响应体，这里替换为统一的错误 JSON，并保留 Allow 头
pub async fn error_response_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if response.extensions().get::<LoggedError>().is_some() {
        return response;
    }

    if status == StatusCode::METHOD_NOT_ALLOWED {
        let mut rewritten =
            ApiError::MethodNotAllowed(format!("{} {}", method, uri)).into_response();
        if let Some(allow) = response.headers().get(ALLOW) {
            rewritten.headers_mut().insert(ALLOW, allow.clone());
        }
        return rewritten;
    }

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
