//! 成员服务
//!
//! 负责成员写入前的邮箱唯一性检查和商户成员分页。
//!
//! ## 唯一性保证
//!
//! 检查与写入是两条独立语句，中间不加锁：顺序写入时相同邮箱只能成功一次，
//! 并发写入时两个请求可能同时通过检查并都写入成功。

use std::sync::Arc;

use merchant_shared::observability::metrics;
use tracing::{info, instrument, warn};

use crate::error::{ManagementError, Result};
use crate::models::Member;
use crate::pagination::PageWindow;
use crate::repository::MemberRepositoryTrait;

/// 表示"不排除任何成员"的哨兵 ID，插入前的邮箱检查使用
pub const NO_MEMBER_ID: i64 = -1;

/// 成员服务
pub struct MemberService {
    repo: Arc<dyn MemberRepositoryTrait>,
}

impl MemberService {
    pub fn new(repo: Arc<dyn MemberRepositoryTrait>) -> Self {
        Self { repo }
    }

    /// 邮箱是否已被 `exclude_member_id` 以外的成员占用
    ///
    /// 空邮箱返回校验错误，不访问数据库
    pub async fn email_exists(&self, exclude_member_id: i64, email: &str) -> Result<bool> {
        if email.is_empty() {
            return Err(ManagementError::Validation("邮箱不能为空".to_string()));
        }
        self.repo.email_taken(exclude_member_id, email).await
    }

    /// 创建成员，返回新分配的 ID
    #[instrument(skip(self, member), fields(merchant_id = member.merchant_id))]
    pub async fn insert(&self, member: &Member) -> Result<i64> {
        let result = self.insert_checked(member).await;
        record("insert", &result);

        let id = result?;
        info!(member_id = id, "成员已创建");
        Ok(id)
    }

    async fn insert_checked(&self, member: &Member) -> Result<i64> {
        if self.email_exists(NO_MEMBER_ID, &member.email).await? {
            return Err(duplicate("insert", &member.email));
        }
        self.repo.insert(member).await
    }

    /// 获取成员，不存在时返回 MemberNotFound
    pub async fn get_by_id(&self, id: i64) -> Result<Member> {
        self.repo
            .get(id)
            .await?
            .ok_or(ManagementError::MemberNotFound(id))
    }

    /// 整体替换成员字段（包括所属商户），返回受影响行数
    ///
    /// 检查邮箱时排除成员自身，因此保留原邮箱不会触发冲突。ID 不存在时返回 0。
    #[instrument(skip(self, member))]
    pub async fn update(&self, id: i64, member: &Member) -> Result<u64> {
        let result = self.update_checked(id, member).await;
        record("update", &result);

        let affected = result?;
        info!(member_id = id, rows_affected = affected, "成员已更新");
        Ok(affected)
    }

    async fn update_checked(&self, id: i64, member: &Member) -> Result<u64> {
        if self.email_exists(id, &member.email).await? {
            return Err(duplicate("update", &member.email));
        }
        self.repo.update(id, member).await
    }

    /// 删除成员；ID 不存在时返回 0
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = self.repo.delete(id).await;
        record("delete", &result);

        let affected = result?;
        info!(member_id = id, rows_affected = affected, "成员已删除");
        Ok(affected)
    }

    /// 商户成员分页，page 从 1 开始
    ///
    /// 按 memberid 升序拉取前 `page * size` 行，再跳过前 `(page - 1) * size` 行
    pub async fn list_page(&self, merchant_id: i64, page: i64, size: i64) -> Result<Vec<Member>> {
        let window = PageWindow::new(page, size)?;

        let rows = self
            .repo
            .list_by_merchant(merchant_id, window.fetch_limit())
            .await?;
        metrics::record_page_scan(rows.len());

        Ok(window.apply(rows))
    }
}

fn duplicate(operation: &str, email: &str) -> ManagementError {
    warn!(operation, email = %email, "邮箱已被占用，拒绝写入");
    metrics::record_duplicate_email(operation);
    ManagementError::DuplicateEmail(email.to_string())
}

fn record<T>(operation: &str, result: &Result<T>) {
    let status = if result.is_ok() { "success" } else { "error" };
    metrics::record_member_operation(operation, status);
}
