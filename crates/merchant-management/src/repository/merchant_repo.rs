//! 商户仓储

use std::sync::Arc;

use async_trait::async_trait;
use merchant_shared::database::ConnectionManager;
use tracing::instrument;

use super::traits::MerchantRepositoryTrait;
use crate::error::Result;
use crate::models::Merchant;

/// 商户仓储
pub struct MerchantRepository {
    connections: Arc<ConnectionManager>,
}

impl MerchantRepository {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl MerchantRepositoryTrait for MerchantRepository {
    #[instrument(skip(self, merchant), fields(name = %merchant.name))]
    async fn insert(&self, merchant: &Merchant) -> Result<i64> {
        let pool = self.connections.pool().await;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO merchants (name, age, location)
            VALUES ($1, $2, $3)
            RETURNING merchantid
            "#,
        )
        .bind(&merchant.name)
        .bind(merchant.age)
        .bind(&merchant.location)
        .fetch_one(&pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Merchant>> {
        let pool = self.connections.pool().await;

        let merchant = sqlx::query_as::<_, Merchant>(
            r#"
            SELECT merchantid, name, age, location
            FROM merchants
            WHERE merchantid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        Ok(merchant)
    }

    #[instrument(skip(self, merchant))]
    async fn update(&self, id: i64, merchant: &Merchant) -> Result<u64> {
        let pool = self.connections.pool().await;

        let result = sqlx::query(
            r#"
            UPDATE merchants
            SET name = $2, age = $3, location = $4
            WHERE merchantid = $1
            "#,
        )
        .bind(id)
        .bind(&merchant.name)
        .bind(merchant.age)
        .bind(&merchant.location)
        .execute(&pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64> {
        let pool = self.connections.pool().await;

        let result = sqlx::query("DELETE FROM merchants WHERE merchantid = $1")
            .bind(id)
            .execute(&pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_all(&self) -> Result<Vec<Merchant>> {
        let pool = self.connections.pool().await;

        let merchants = sqlx::query_as::<_, Merchant>(
            r#"
            SELECT merchantid, name, age, location
            FROM merchants
            ORDER BY merchantid ASC
            "#,
        )
        .fetch_all(&pool)
        .await?;

        Ok(merchants)
    }
}
