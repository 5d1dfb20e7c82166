//! 商户服务
//!
//! 商户没有额外的业务规则，服务层负责把空结果转换为 NotFound 并记录指标

use std::sync::Arc;

use merchant_shared::observability::metrics;
use tracing::{info, instrument};

use crate::error::{ManagementError, Result};
use crate::models::Merchant;
use crate::repository::MerchantRepositoryTrait;

/// 商户服务
pub struct MerchantService {
    repo: Arc<dyn MerchantRepositoryTrait>,
}

impl MerchantService {
    pub fn new(repo: Arc<dyn MerchantRepositoryTrait>) -> Self {
        Self { repo }
    }

    /// 创建商户，返回新分配的 ID
    #[instrument(skip(self, merchant), fields(name = %merchant.name))]
    pub async fn insert(&self, merchant: &Merchant) -> Result<i64> {
        let result = self.repo.insert(merchant).await;
        record("insert", &result);

        let id = result?;
        info!(merchant_id = id, "商户已创建");
        Ok(id)
    }

    /// 获取商户，不存在时返回 MerchantNotFound
    pub async fn get_by_id(&self, id: i64) -> Result<Merchant> {
        self.repo
            .get(id)
            .await?
            .ok_or(ManagementError::MerchantNotFound(id))
    }

    /// 整体替换商户字段，返回受影响行数；ID 不存在时返回 0
    #[instrument(skip(self, merchant))]
    pub async fn update(&self, id: i64, merchant: &Merchant) -> Result<u64> {
        let result = self.repo.update(id, merchant).await;
        record("update", &result);

        let affected = result?;
        info!(merchant_id = id, rows_affected = affected, "商户已更新");
        Ok(affected)
    }

    /// 删除商户，不级联删除成员；ID 不存在时返回 0
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = self.repo.delete(id).await;
        record("delete", &result);

        let affected = result?;
        info!(merchant_id = id, rows_affected = affected, "商户已删除");
        Ok(affected)
    }

    /// 列出全部商户，按 ID 升序
    pub async fn list_all(&self) -> Result<Vec<Merchant>> {
        self.repo.list_all().await
    }
}

fn record<T>(operation: &str, result: &Result<T>) {
    let status = if result.is_ok() { "success" } else { "error" };
    metrics::record_merchant_operation(operation, status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockMerchantRepositoryTrait;

    fn service(mock: MockMerchantRepositoryTrait) -> MerchantService {
        MerchantService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_get_missing_merchant_is_not_found() {
        let mut mock = MockMerchantRepositoryTrait::new();
        mock.expect_get().returning(|_| Ok(None));

        let err = service(mock).get_by_id(99).await.unwrap_err();
        assert!(matches!(err, ManagementError::MerchantNotFound(99)));
    }

    #[tokio::test]
    async fn test_get_existing_merchant() {
        let mut mock = MockMerchantRepositoryTrait::new();
        mock.expect_get()
            .withf(|id| *id == 5)
            .returning(|id| Ok(Some(Merchant::new("Acme", 2, "Lyon").with_id(id))));

        let merchant = service(mock).get_by_id(5).await.unwrap();
        assert_eq!(merchant.merchant_id, 5);
        assert_eq!(merchant.name, "Acme");
    }

    #[tokio::test]
    async fn test_delete_missing_merchant_succeeds() {
        let mut mock = MockMerchantRepositoryTrait::new();
        mock.expect_delete().times(1).returning(|_| Ok(0));

        assert_eq!(service(mock).delete(404).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_returns_rows_affected() {
        let mut mock = MockMerchantRepositoryTrait::new();
        mock.expect_update()
            .withf(|id, m| *id == 3 && m.location == "Rome")
            .returning(|_, _| Ok(1));

        let affected = service(mock)
            .update(3, &Merchant::new("Acme", 4, "Rome"))
            .await
            .unwrap();
        assert_eq!(affected, 1);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut mock = MockMerchantRepositoryTrait::new();
        mock.expect_insert()
            .returning(|_| Err(ManagementError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(mock)
            .insert(&Merchant::new("Acme", 1, "Oslo"))
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Database(_)));
    }
}
