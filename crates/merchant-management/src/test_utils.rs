//! 内存仓储实现
//!
//! 供服务层单元测试和 HTTP 路由测试使用，不依赖数据库。
//! 语义与 PostgreSQL 实现一致：ID 自增、更新删除不存在的行返回 0、成员按 ID 升序列出。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::{Barrier, Mutex};

use crate::error::Result;
use crate::models::{Member, Merchant};
use crate::repository::{MemberRepositoryTrait, MerchantRepositoryTrait};

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// ==================== 商户 ====================

/// 内存商户仓储
#[derive(Default)]
pub struct InMemoryMerchantRepository {
    table: Mutex<Table<Merchant>>,
}

impl InMemoryMerchantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantRepositoryTrait for InMemoryMerchantRepository {
    async fn insert(&self, merchant: &Merchant) -> Result<i64> {
        let mut table = self.table.lock().await;
        let id = table.allocate_id();
        table.rows.insert(id, merchant.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Merchant>> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, merchant: &Merchant) -> Result<u64> {
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = merchant.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let removed = self.table.lock().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list_all(&self) -> Result<Vec<Merchant>> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }
}

// ==================== 成员 ====================

/// 内存成员仓储
///
/// 可选的检查屏障用于重现"先查后写"的竞争：每次邮箱检查在得出结果后等待屏障，
/// 直到指定数量的检查都已完成才返回。屏障会重复生效，因此只适合检查次数固定的测试。
#[derive(Default)]
pub struct InMemoryMemberRepository {
    table: Mutex<Table<Member>>,
    check_barrier: Option<Barrier>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每 `parties` 次邮箱检查同时放行一次
    pub fn with_check_barrier(parties: usize) -> Self {
        Self {
            table: Mutex::default(),
            check_barrier: Some(Barrier::new(parties)),
        }
    }

    /// 统计使用该邮箱的成员数量
    pub async fn count_with_email(&self, email: &str) -> usize {
        self.table
            .lock()
            .await
            .rows
            .values()
            .filter(|m| m.email == email)
            .count()
    }
}

#[async_trait]
impl MemberRepositoryTrait for InMemoryMemberRepository {
    async fn email_taken(&self, exclude_id: i64, email: &str) -> Result<bool> {
        let taken = self
            .table
            .lock()
            .await
            .rows
            .values()
            .any(|m| m.email == email && m.member_id != exclude_id);

        if let Some(barrier) = &self.check_barrier {
            barrier.wait().await;
        }
        Ok(taken)
    }

    async fn insert(&self, member: &Member) -> Result<i64> {
        let mut table = self.table.lock().await;
        let id = table.allocate_id();
        table.rows.insert(id, member.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Member>> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, member: &Member) -> Result<u64> {
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = member.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let removed = self.table.lock().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list_by_merchant(&self, merchant_id: i64, limit: i64) -> Result<Vec<Member>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .table
            .lock()
            .await
            .rows
            .values()
            .filter(|m| m.merchant_id == merchant_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryMerchantRepository::new();
        let a = repo.insert(&Merchant::new("A", 1, "X")).await.unwrap();
        let b = repo.insert(&Merchant::new("B", 2, "Y")).await.unwrap();
        assert_eq!((a, b), (1, 2));
    }

    #[tokio::test]
    async fn test_missing_rows_affect_nothing() {
        let repo = InMemoryMemberRepository::new();
        assert_eq!(repo.delete(9).await.unwrap(), 0);
        assert_eq!(repo.update(9, &Member::new("A", "a@x.io", 1)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_by_merchant_filters_and_limits() {
        let repo = InMemoryMemberRepository::new();
        for i in 0..5 {
            repo.insert(&Member::new("a", format!("a{}@x.io", i), 1)).await.unwrap();
            repo.insert(&Member::new("b", format!("b{}@x.io", i), 2)).await.unwrap();
        }

        let rows = repo.list_by_merchant(1, 3).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|m| m.merchant_id == 1));
        assert!(rows.windows(2).all(|w| w[0].member_id < w[1].member_id));
    }

    #[tokio::test]
    async fn test_email_taken_excludes_given_id() {
        let repo = InMemoryMemberRepository::new();
        let id = repo.insert(&Member::new("a", "a@x.io", 1)).await.unwrap();

        assert!(repo.email_taken(-1, "a@x.io").await.unwrap());
        assert!(!repo.email_taken(id, "a@x.io").await.unwrap());
    }
}
