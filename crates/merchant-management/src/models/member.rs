//! 成员实体定义

use serde::{Deserialize, Serialize};

/// 商户下的团队成员
///
/// email 在所有成员中唯一（更新时排除自身）；merchant_id 不校验商户是否存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    #[serde(rename = "memberID", default)]
    #[sqlx(rename = "memberid")]
    pub member_id: i64,
    pub name: String,
    pub email: String,
    /// 所属商户 ID
    #[serde(rename = "merchantID")]
    #[sqlx(rename = "merchantid")]
    pub merchant_id: i64,
}

impl Member {
    /// 构造一个尚未入库的成员
    pub fn new(name: impl Into<String>, email: impl Into<String>, merchant_id: i64) -> Self {
        Self {
            member_id: 0,
            name: name.into(),
            email: email.into(),
            merchant_id,
        }
    }

    pub fn with_id(mut self, member_id: i64) -> Self {
        self.member_id = member_id;
        self
    }
}
