//! 请求 DTO 定义
//!
//! 字段名沿用对外 JSON 约定（`merchantID` 等），与领域模型一致

use merchant_management::{Member, Merchant};
use serde::Deserialize;
use validator::Validate;

/// 成员分页默认页码
pub const DEFAULT_PAGE: i64 = 1;
/// 成员分页默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 创建/更新商户请求
///
/// 更新时整体替换，未提供的字段取默认值
#[derive(Debug, Deserialize, Validate)]
pub struct MerchantRequest {
    #[validate(length(min = 1, message = "商户名称不能为空"))]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub location: String,
}

impl MerchantRequest {
    pub fn into_merchant(self) -> Merchant {
        Merchant::new(self.name, self.age, self.location)
    }
}

/// 创建/更新成员请求
///
/// 邮箱是否为空由服务层校验
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "merchantID", default)]
    pub merchant_id: i64,
}

impl MemberRequest {
    pub fn into_member(self) -> Member {
        Member::new(self.name, self.email, self.merchant_id)
    }
}

/// 成员分页查询参数
///
/// 参数缺失或无法解析为整数时使用默认值；每页条数小于 1 时同样回退为默认值。
/// 页码不在这里修正，非正数交给分页器报校验错误。
#[derive(Debug, Default, Deserialize)]
pub struct MemberPageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl MemberPageQuery {
    pub fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn size(&self) -> i64 {
        match parse_or(self.size.as_deref(), DEFAULT_PAGE_SIZE) {
            size if size < 1 => DEFAULT_PAGE_SIZE,
            size => size,
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
