//! 商户管理错误类型
//!
//! 定义仓储层和服务层的业务错误与存储错误

use thiserror::Error;

/// PostgreSQL 唯一约束冲突的 SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

/// 商户管理错误类型
#[derive(Debug, Error)]
pub enum ManagementError {
    // === 校验错误 ===
    #[error("参数校验失败: {0}")]
    Validation(String),

    #[error("邮箱已被其他成员使用: {0}")]
    DuplicateEmail(String),

    // === 资源不存在 ===
    #[error("商户不存在: {0}")]
    MerchantNotFound(i64),

    #[error("成员不存在: {0}")]
    MemberNotFound(i64),

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ManagementError>;

impl ManagementError {
    /// 是否为业务错误（调用方输入导致，而非基础设施故障）
    pub fn is_business_error(&self) -> bool {
        !matches!(self, Self::Database(_))
    }

    /// 获取错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::MerchantNotFound(_) => "MERCHANT_NOT_FOUND",
            Self::MemberNotFound(_) => "MEMBER_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// 将成员写入时的唯一约束冲突映射为 DuplicateEmail
    ///
    /// 默认表结构没有 email 唯一索引，只有运维手动加上索引后才会走到这里
    pub(crate) fn from_member_write(err: sqlx::Error, email: &str) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| code == UNIQUE_VIOLATION);

        if is_unique_violation {
            Self::DuplicateEmail(email.to_string())
        } else {
            Self::Database(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            ManagementError::Validation("x".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ManagementError::DuplicateEmail("a@b.c".into()).error_code(),
            "DUPLICATE_EMAIL"
        );
        assert_eq!(
            ManagementError::MerchantNotFound(1).error_code(),
            "MERCHANT_NOT_FOUND"
        );
        assert_eq!(
            ManagementError::MemberNotFound(1).error_code(),
            "MEMBER_NOT_FOUND"
        );
        assert_eq!(
            ManagementError::Database(sqlx::Error::RowNotFound).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_is_business_error() {
        assert!(ManagementError::Validation("x".into()).is_business_error());
        assert!(ManagementError::DuplicateEmail("a@b.c".into()).is_business_error());
        assert!(ManagementError::MemberNotFound(3).is_business_error());
        assert!(!ManagementError::Database(sqlx::Error::PoolTimedOut).is_business_error());
    }

    #[test]
    fn test_error_display() {
        assert!(
            ManagementError::DuplicateEmail("dup@shop.io".into())
                .to_string()
                .contains("dup@shop.io")
        );
        assert!(ManagementError::MerchantNotFound(42).to_string().contains("42"));
    }

    #[test]
    fn test_non_database_write_error_stays_database() {
        let err = ManagementError::from_member_write(sqlx::Error::PoolTimedOut, "a@b.c");
        assert!(matches!(err, ManagementError::Database(_)));
    }
}
