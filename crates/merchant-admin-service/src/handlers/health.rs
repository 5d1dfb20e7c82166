//! 健康检查处理器

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

const SERVICE_NAME: &str = "merchant-admin-service";

/// 存活探针：服务进程正常即返回 ok
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查数据库连接是否可用
///
/// GET /ready
pub async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    let db_ok = match &state.connections {
        Some(connections) => connections.health_check().await.is_ok(),
        None => false,
    };

    Json(json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": SERVICE_NAME,
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
