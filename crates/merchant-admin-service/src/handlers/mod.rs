//! HTTP 请求处理器模块
//!
//! 包含所有 REST API 端点的处理器实现

pub mod health;
pub mod member;
pub mod merchant;

use crate::error::AdminError;

/// 解析路径中的整数 ID
///
/// 使用自定义解析而不是 `Path<i64>`，使非法 ID 也返回统一的错误响应体
pub(crate) fn parse_id(raw: &str) -> Result<i64, AdminError> {
    raw.parse()
        .map_err(|_| AdminError::Validation(format!("无效的 ID: {}", raw)))
}
