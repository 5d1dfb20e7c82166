//! 数据库连接管理模块
//!
//! 进程内只维护一个 PostgreSQL 连接句柄：首次使用时建立并做存活检查，
//! 之后所有仓储共享同一句柄，直到进程退出。

use crate::config::DatabaseConfig;
use crate::error::{InfraError, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{error, info, instrument};

/// 共享连接管理器
///
/// 由组合根（main）创建一次并以 `Arc` 注入各仓储。
/// 首次获取连接失败属于致命错误，直接终止进程，不向调用方返回。
pub struct ConnectionManager {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl ConnectionManager {
    /// 创建管理器，不会立即连接数据库
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// 使用已建立的连接池创建管理器
    ///
    /// 集成测试中复用测试夹具创建的连接池
    pub fn from_pool(config: DatabaseConfig, pool: PgPool) -> Self {
        Self {
            config,
            pool: OnceCell::new_with(Some(pool)),
        }
    }

    /// 获取共享连接句柄
    ///
    /// 首次调用时建立连接并缓存；并发的首次调用只会触发一次初始化。
    /// 连接失败时记录错误并以状态码 1 退出进程。
    pub async fn pool(&self) -> PgPool {
        self.pool
            .get_or_init(|| async {
                match try_connect(&self.config).await {
                    Ok(pool) => pool,
                    Err(err) => abort_on_connect_failure(err),
                }
            })
            .await
            .clone()
    }

    /// 连接句柄是否已经建立
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// 健康检查
    pub async fn health_check(&self) -> Result<()> {
        let pool = self.pool().await;
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map(|_| ())
            .map_err(InfraError::from)
    }

    /// 关闭连接池（仅在优雅关闭时调用）
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection pool closed");
        }
    }
}

/// 按配置建立连接并执行存活检查
///
/// 这是可失败的底层步骤，`ConnectionManager::pool` 在其之上施加「失败即退出」的策略。
#[instrument(skip(config))]
pub async fn try_connect(config: &DatabaseConfig) -> Result<PgPool> {
    let url = config.url.trim();
    if url.is_empty() {
        return Err(InfraError::MissingDatabaseUrl);
    }

    let options = PgConnectOptions::from_str(url)
        .map_err(|e| InfraError::InvalidDatabaseUrl(e.to_string()))?;

    info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    info!("Successfully connected to database");

    Ok(pool)
}

fn abort_on_connect_failure(err: InfraError) -> ! {
    error!(error = %err, code = err.code(), "Unable to establish database connection, exiting");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_try_connect_rejects_missing_url() {
        let config = DatabaseConfig::default();
        let err = try_connect(&config).await.unwrap_err();
        assert!(matches!(err, InfraError::MissingDatabaseUrl));
    }

    #[tokio::test]
    async fn test_try_connect_rejects_blank_url() {
        let config = DatabaseConfig::with_url("   ");
        let err = try_connect(&config).await.unwrap_err();
        assert!(matches!(err, InfraError::MissingDatabaseUrl));
    }

    #[tokio::test]
    async fn test_try_connect_rejects_malformed_url() {
        let config = DatabaseConfig::with_url("not a url");
        let err = try_connect(&config).await.unwrap_err();
        assert!(matches!(err, InfraError::InvalidDatabaseUrl(_)));
    }

    #[test]
    fn test_manager_is_lazy() {
        let manager = ConnectionManager::new(DatabaseConfig::with_url("postgres://localhost/x"));
        assert!(!manager.is_connected());
    }

    #[tokio::test]
    #[ignore] // 需要数据库连接
    async fn test_pool_is_created_once_and_reused() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let manager = ConnectionManager::new(DatabaseConfig::with_url(url));

        let first = manager.pool().await;
        assert!(manager.is_connected());
        let second = manager.pool().await;

        // 两次获取到的是同一个池：关闭其一，另一个也随之关闭
        first.close().await;
        assert!(second.is_closed());
    }
}
