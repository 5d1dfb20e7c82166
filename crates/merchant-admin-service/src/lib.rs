//! 商户管理后台服务
//!
//! 提供商户与成员管理的 REST API。
//!
//! ## 核心功能
//!
//! - **商户管理**：商户的创建、查询、更新、删除和列表
//! - **成员管理**：成员的增删改查，邮箱冲突返回 409
//! - **成员分页**：按页码和每页条数查询商户成员
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// 重新导出核心类型
pub use dto::{MemberPageQuery, MemberRequest, MerchantRequest, MutationResponse};
pub use error::{AdminError, Result};
pub use state::AppState;

pub use merchant_management::{Member, Merchant};
