//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::error)
//! - 日志、输入长度校验

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// 成功响应 (带数据)
pub fn ok<T>(data: T) -> axum::Json<ApiResponse<T>> {
    axum::Json(ApiResponse::success(data))
}

/// 成功响应 (带自定义消息)
pub fn ok_with_message<T>(message: impl Into<String>, data: T) -> axum::Json<ApiResponse<T>> {
    axum::Json(ApiResponse::success_with_message(message, data))
}
