//! 成员分页
//!
//! 将 (page, size) 换算为行窗口：先按 `page * size` 上限拉取，再在应用层跳过前
//! `(page - 1) * size` 行。不使用 OFFSET，页码越大扫描的行越多。

use crate::error::{ManagementError, Result};

/// 分页窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    size: i64,
    start: i64,
    fetch_limit: i64,
}

impl PageWindow {
    /// 创建分页窗口
    ///
    /// page 从 1 开始，`page <= 0` 返回校验错误。size 不在这里校验，
    /// 小于 1 时窗口为空。
    pub fn new(page: i64, size: i64) -> Result<Self> {
        if page <= 0 {
            return Err(ManagementError::Validation(format!(
                "页码必须大于 0，当前为 {}",
                page
            )));
        }

        let size = size.max(0);
        let fetch_limit = page
            .checked_mul(size)
            .ok_or_else(|| ManagementError::Validation("分页参数过大".to_string()))?;

        Ok(Self {
            page,
            size,
            start: fetch_limit - size,
            fetch_limit,
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// 需要跳过的行数
    pub fn start(&self) -> i64 {
        self.start
    }

    /// 查询时使用的 LIMIT
    pub fn fetch_limit(&self) -> i64 {
        self.fetch_limit
    }

    /// 对已按顺序拉取的行应用窗口
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter()
            .skip(self.start as usize)
            .take(self.size as usize)
            .collect()
    }
}
