//! 商户实体定义

use serde::{Deserialize, Serialize};

/// 商户
///
/// merchant_id 由数据库分配，创建后不可修改；更新时整体替换其余字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Merchant {
    #[serde(rename = "merchantID", default)]
    #[sqlx(rename = "merchantid")]
    pub merchant_id: i64,
    /// 商户名称（必填）
    pub name: String,
    pub age: i64,
    pub location: String,
}

impl Merchant {
    /// 构造一个尚未入库的商户，merchant_id 由插入时分配
    pub fn new(name: impl Into<String>, age: i64, location: impl Into<String>) -> Self {
        Self {
            merchant_id: 0,
            name: name.into(),
            age,
            location: location.into(),
        }
    }

    /// 返回带指定 ID 的副本
    pub fn with_id(mut self, merchant_id: i64) -> Self {
        self.merchant_id = merchant_id;
        self
    }
}
