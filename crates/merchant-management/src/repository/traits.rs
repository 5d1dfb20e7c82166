//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试。
//! 每个方法只对应一条 SQL 语句，校验与唯一性检查放在服务层。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Member, Merchant};

/// 商户仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantRepositoryTrait: Send + Sync {
    /// 插入商户，返回数据库分配的 ID
    async fn insert(&self, merchant: &Merchant) -> Result<i64>;
    async fn get(&self, id: i64) -> Result<Option<Merchant>>;
    /// 整体替换商户字段，返回受影响行数
    async fn update(&self, id: i64, merchant: &Merchant) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
    async fn list_all(&self) -> Result<Vec<Merchant>>;
}

/// 成员仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    /// 是否存在 ID 不等于 `exclude_id` 且邮箱相同的成员
    async fn email_taken(&self, exclude_id: i64, email: &str) -> Result<bool>;
    async fn insert(&self, member: &Member) -> Result<i64>;
    async fn get(&self, id: i64) -> Result<Option<Member>>;
    async fn update(&self, id: i64, member: &Member) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
    /// 按 memberid 升序返回商户下的前 `limit` 个成员
    async fn list_by_merchant(&self, merchant_id: i64, limit: i64) -> Result<Vec<Member>>;
}
