//! 响应 DTO 定义
//!
//! 读接口直接返回记录本身，写接口和错误统一使用 `{id, message}` 结构

use serde::Serialize;

/// 写操作响应
///
/// id 未设置或 message 为空时对应字段不输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl MutationResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: message.into(),
        }
    }

    /// 仅包含消息的响应
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
        }
    }
}
