//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use merchant_management::{MemberService, MerchantService};
use merchant_shared::database::ConnectionManager;

/// Axum 应用共享状态
///
/// 服务与连接管理器通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    pub merchant_service: Arc<MerchantService>,
    pub member_service: Arc<MemberService>,
    /// 就绪探针使用；测试中使用内存仓储时为空
    pub connections: Option<Arc<ConnectionManager>>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(merchant_service: MerchantService, member_service: MemberService) -> Self {
        Self {
            merchant_service: Arc::new(merchant_service),
            member_service: Arc::new(member_service),
            connections: None,
        }
    }

    /// 挂载连接管理器，用于就绪检查
    pub fn with_connections(mut self, connections: Arc<ConnectionManager>) -> Self {
        self.connections = Some(connections);
        self
    }
}
