//! 成员仓储
//!
//! 成员的增删改查以及邮箱占用查询。邮箱唯一性由服务层先查后写保证，
//! 若表上另有唯一索引，冲突会在这里转换为 DuplicateEmail。

use std::sync::Arc;

use async_trait::async_trait;
use merchant_shared::database::ConnectionManager;
use tracing::instrument;

use super::traits::MemberRepositoryTrait;
use crate::error::{ManagementError, Result};
use crate::models::Member;

/// 成员仓储
pub struct MemberRepository {
    connections: Arc<ConnectionManager>,
}

impl MemberRepository {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn email_taken(&self, exclude_id: i64, email: &str) -> Result<bool> {
        let pool = self.connections.pool().await;

        let found: Option<String> = sqlx::query_scalar(
            r#"
            SELECT email
            FROM members
            WHERE email = $1 AND memberid <> $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_optional(&pool)
        .await?;

        Ok(found.is_some())
    }

    #[instrument(skip(self, member), fields(merchant_id = member.merchant_id))]
    async fn insert(&self, member: &Member) -> Result<i64> {
        let pool = self.connections.pool().await;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO members (name, email, merchantid)
            VALUES ($1, $2, $3)
            RETURNING memberid
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.merchant_id)
        .fetch_one(&pool)
        .await
        .map_err(|e| ManagementError::from_member_write(e, &member.email))?;

        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Member>> {
        let pool = self.connections.pool().await;

        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT memberid, name, email, merchantid
            FROM members
            WHERE memberid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        Ok(member)
    }

    #[instrument(skip(self, member))]
    async fn update(&self, id: i64, member: &Member) -> Result<u64> {
        let pool = self.connections.pool().await;

        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = $2, email = $3, merchantid = $4
            WHERE memberid = $1
            "#,
        )
        .bind(id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.merchant_id)
        .execute(&pool)
        .await
        .map_err(|e| ManagementError::from_member_write(e, &member.email))?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64> {
        let pool = self.connections.pool().await;

        let result = sqlx::query("DELETE FROM members WHERE memberid = $1")
            .bind(id)
            .execute(&pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_by_merchant(&self, merchant_id: i64, limit: i64) -> Result<Vec<Member>> {
        let pool = self.connections.pool().await;

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT memberid, name, email, merchantid
            FROM members
            WHERE merchantid = $1
            ORDER BY memberid ASC
            LIMIT $2
            "#,
        )
        .bind(merchant_id)
        .bind(limit)
        .fetch_all(&pool)
        .await?;

        Ok(members)
    }
}
