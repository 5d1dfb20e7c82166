//! 商户管理核心库
//!
//! 提供商户与成员的持久化、校验和分页。
//!
//! ## 核心功能
//!
//! - **商户管理**：商户的增删改查
//! - **成员管理**：成员的增删改查，写入前检查邮箱是否已被其他成员使用
//! - **成员分页**：按 memberid 顺序对商户下的成员分页
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `pagination`: 分页窗口计算
//! - `service`: 业务服务层
//! - `test_utils`: 内存仓储，用于测试

pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod test_utils;

pub use error::{ManagementError, Result};
pub use models::{Member, Merchant};
pub use pagination::PageWindow;
pub use repository::{
    MemberRepository, MemberRepositoryTrait, MerchantRepository, MerchantRepositoryTrait,
};
pub use service::{MemberService, MerchantService, NO_MEMBER_ID};
