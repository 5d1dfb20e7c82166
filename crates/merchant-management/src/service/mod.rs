//! 服务层
//!
//! 在仓储之上实现商户与成员的业务规则。
//!
//! ## 模块结构
//!
//! - `merchant_service`: 商户增删改查
//! - `member_service`: 成员增删改查、邮箱唯一性检查、分页

pub mod member_service;
pub mod merchant_service;

pub use member_service::{MemberService, NO_MEMBER_ID};
pub use merchant_service::MerchantService;
