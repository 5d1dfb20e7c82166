//! 管理后台错误类型定义
//!
//! 将领域错误映射为 HTTP 状态码，并使用与写操作相同的 `{id, message}` 响应体

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use merchant_management::ManagementError;

use crate::dto::MutationResponse;

/// 系统级错误返回给调用方的通用提示
const INTERNAL_ERROR_MESSAGE: &str = "服务内部错误，请稍后重试";

/// 管理后台错误类型
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),
    #[error("邮箱已被其他成员使用: {0}")]
    DuplicateEmail(String),

    // 资源不存在
    #[error("商户不存在: {0}")]
    MerchantNotFound(i64),
    #[error("成员不存在: {0}")]
    MemberNotFound(i64),

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdminError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::MerchantNotFound(_) | Self::MemberNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于日志关联）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::MerchantNotFound(_) => "MERCHANT_NOT_FOUND",
            Self::MemberNotFound(_) => "MEMBER_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => {
                tracing::warn!(code = other.error_code(), error = %other, "Request rejected");
                other.to_string()
            }
        };

        (status, axum::Json(MutationResponse::message(message))).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for AdminError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 从 merchant-management 的错误转换
impl From<ManagementError> for AdminError {
    fn from(err: ManagementError) -> Self {
        match err {
            ManagementError::Validation(msg) => Self::Validation(msg),
            ManagementError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            ManagementError::MerchantNotFound(id) => Self::MerchantNotFound(id),
            ManagementError::MemberNotFound(id) => Self::MemberNotFound(id),
            ManagementError::Database(e) => Self::Database(e),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde_json::json;

    // ---- 辅助函数 ----

    /// 构造错误变体及其期望的 (StatusCode, error_code) 映射
    fn all_error_variants() -> Vec<(AdminError, StatusCode, &'static str)> {
        vec![
            (AdminError::Validation("page must be positive".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (AdminError::DuplicateEmail("dup@shop.io".into()), StatusCode::CONFLICT, "DUPLICATE_EMAIL"),
            (AdminError::MerchantNotFound(10), StatusCode::NOT_FOUND, "MERCHANT_NOT_FOUND"),
            (AdminError::MemberNotFound(20), StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),
            (AdminError::Database(sqlx::Error::PoolTimedOut), StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        ]
    }

    async fn body_of(error: AdminError) -> serde_json::Value {
        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("读取响应体失败");
        serde_json::from_slice(&bytes).expect("响应体不是合法 JSON")
    }

    // ---- 表驱动 ----

    #[test]
    fn test_all_variants_status_code() {
        for (error, expected_status, label) in all_error_variants() {
            assert_eq!(error.status_code(), expected_status, "状态码不匹配: variant={label}");
        }
    }

    #[test]
    fn test_all_variants_error_code() {
        for (error, _status, expected_code) in all_error_variants() {
            assert_eq!(error.error_code(), expected_code);
        }
    }

    // ---- IntoResponse ----

    /// 错误响应体只有 message 字段，不带 id
    #[tokio::test]
    async fn test_into_response_envelope() {
        for (error, expected_status, label) in all_error_variants() {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status, "{label}");

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

            assert!(body.get("id").is_none(), "错误响应不应包含 id: {label}");
            assert!(!body["message"].as_str().unwrap_or("").is_empty(), "{label}");
        }
    }

    #[tokio::test]
    async fn test_system_errors_hide_internal_details() {
        let body = body_of(AdminError::Database(sqlx::Error::Protocol(
            "relation \"members\" does not exist".into(),
        )))
        .await;
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn test_business_errors_preserve_display_message() {
        let body = body_of(AdminError::DuplicateEmail("dup@shop.io".into())).await;
        assert!(body["message"].as_str().unwrap().contains("dup@shop.io"));

        let body = body_of(AdminError::MemberNotFound(42)).await;
        assert!(body["message"].as_str().unwrap().contains("42"));
    }

    // ---- From 转换 ----

    #[test]
    fn test_from_management_error() {
        let err: AdminError = ManagementError::DuplicateEmail("a@b.c".into()).into();
        assert!(matches!(err, AdminError::DuplicateEmail(ref e) if e == "a@b.c"));

        let err: AdminError = ManagementError::MerchantNotFound(5).into();
        assert!(matches!(err, AdminError::MerchantNotFound(5)));

        let err: AdminError = ManagementError::MemberNotFound(6).into();
        assert!(matches!(err, AdminError::MemberNotFound(6)));

        let err: AdminError = ManagementError::Validation("邮箱不能为空".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AdminError = ManagementError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, AdminError::Database(_)));
    }

    #[test]
    fn test_from_validation_errors() {
        use validator::{ValidationError, ValidationErrors};

        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let admin_error: AdminError = errors.into();
        match &admin_error {
            AdminError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("期望 Validation 变体，实际: {:?}", other),
        }
    }
}
