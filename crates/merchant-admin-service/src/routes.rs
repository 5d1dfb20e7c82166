//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{handlers, state::AppState};

/// 构建商户管理路由
fn merchant_routes() -> Router<AppState> {
    Router::new()
        .route("/newmerchant", post(handlers::merchant::create_merchant))
        .route("/merchants", get(handlers::merchant::list_merchants))
        .route(
            "/merchant/{id}",
            get(handlers::merchant::get_merchant).put(handlers::merchant::update_merchant),
        )
        .route(
            "/deletemerchant/{id}",
            delete(handlers::merchant::delete_merchant),
        )
        .route(
            "/merchant/{id}/allmembers",
            get(handlers::member::list_merchant_members),
        )
}

/// 构建成员管理路由
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/member/newmember", post(handlers::member::create_member))
        .route(
            "/member/{memberid}",
            get(handlers::member::get_member).put(handlers::member::update_member),
        )
        .route(
            "/deletemember/{memberid}",
            delete(handlers::member::delete_member),
        )
}

/// 构建 /api 下的全部业务路由
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(merchant_routes()).merge(member_routes())
}

/// 构建完整应用路由（业务路由 + 健康检查）
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(state)
}
