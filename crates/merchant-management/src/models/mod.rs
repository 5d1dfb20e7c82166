//! 领域模型定义
//!
//! 商户与成员两类记录，字段名与数据库列、对外 JSON 名称保持一致

mod member;
mod merchant;

pub use member::*;
pub use merchant::*;
