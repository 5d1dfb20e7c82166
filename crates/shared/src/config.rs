//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 数据库连接串环境变量，进程启动时读取一次
pub const POSTGRES_URL_ENV: &str = "POSTGRES_URL";

/// 数据库配置
///
/// `url` 为空表示未配置，首次获取连接时按致命错误处理
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_seconds: 30,
            idle_timeout_seconds: 600,
        }
    }
}

impl DatabaseConfig {
    /// 使用指定连接串构造配置，其余参数取默认值
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. `.env` 文件（仅填充尚未设置的环境变量）
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. config/{service_name}.toml（服务特定配置）
    /// 5. 环境变量（MERCHANT_ 前缀，如 MERCHANT_SERVER_HOST -> server.host）
    /// 6. 服务特定端口环境变量（如 MERCHANT_ADMIN_PORT）
    /// 7. POSTGRES_URL -> database.url
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        // .env 不存在不是错误，环境变量可能由部署平台注入
        dotenvy::dotenv().ok();

        let env = std::env::var("MERCHANT_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("MERCHANT")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if let Some(port) = Self::get_service_port_from_env(service_name) {
            config.server.port = port;
        }

        if let Some(url) = Self::postgres_url_from_env() {
            config.database.url = url;
        }

        Ok(config)
    }

    /// 从环境变量获取服务特定端口
    ///
    /// - merchant-admin-service -> MERCHANT_ADMIN_PORT
    /// - 其他服务名转换为大写下划线格式 + _PORT
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = match service_name {
            "merchant-admin-service" => "MERCHANT_ADMIN_PORT".to_string(),
            _ => format!("{}_PORT", service_name.to_uppercase().replace('-', "_")),
        };

        std::env::var(env_var_name)
            .ok()
            .and_then(|v| v.parse().ok())
    }

    /// 读取 POSTGRES_URL，空字符串视为未设置
    fn postgres_url_from_env() -> Option<String> {
        std::env::var(POSTGRES_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        // 未配置连接串时保持为空，由 ConnectionManager 在首次使用时拒绝
        assert!(config.database.url.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            ..Default::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_database_config_with_url() {
        let config = DatabaseConfig::with_url("postgres://u:p@localhost:5432/merchants");
        assert_eq!(config.url, "postgres://u:p@localhost:5432/merchants");
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_is_production() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..Default::default()
        };
        assert!(config.is_production());
        assert!(!AppConfig::default().is_production());
    }

    #[test]
    fn test_generic_service_port_conversion() {
        // my-custom-service -> MY_CUSTOM_SERVICE_PORT
        // SAFETY: 变量名仅此测试使用，不与其他测试竞争
        unsafe {
            std::env::set_var("MY_CUSTOM_SERVICE_PORT", "18080");
        }
        assert_eq!(
            AppConfig::get_service_port_from_env("my-custom-service"),
            Some(18080)
        );
        unsafe {
            std::env::remove_var("MY_CUSTOM_SERVICE_PORT");
        }
    }
}
