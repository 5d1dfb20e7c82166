//! 基础设施错误处理模块
//!
//! 定义数据库连接管理的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum InfraError {
    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("数据库连接串未配置，请设置 POSTGRES_URL")]
    MissingDatabaseUrl,

    #[error("数据库连接串无效: {0}")]
    InvalidDatabaseUrl(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, InfraError>;

impl InfraError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::MissingDatabaseUrl => "MISSING_DATABASE_URL",
            Self::InvalidDatabaseUrl(_) => "INVALID_DATABASE_URL",
        }
    }
}
