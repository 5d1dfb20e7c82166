//! 数据库仓储层
//!
//! 提供商户与成员的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - 每次操作通过共享的 ConnectionManager 取得连接句柄，执行单条语句
//! - 不做重试，数据库错误原样上抛
//! - 定义 trait 接口以支持 mock 测试

mod member_repo;
mod merchant_repo;
mod traits;

pub use member_repo::MemberRepository;
pub use merchant_repo::MerchantRepository;
pub use traits::*;
