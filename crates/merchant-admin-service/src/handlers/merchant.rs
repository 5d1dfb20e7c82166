//! 商户管理 API 处理器
//!
//! 实现商户的 CRUD 操作

use axum::{
    Json,
    extract::{Path, State},
};
use merchant_management::Merchant;
use tracing::info;
use validator::Validate;

use super::parse_id;
use crate::{
    dto::{MerchantRequest, MutationResponse},
    error::AdminError,
    state::AppState,
};

/// 创建商户
///
/// POST /api/newmerchant
pub async fn create_merchant(
    State(state): State<AppState>,
    Json(req): Json<MerchantRequest>,
) -> Result<Json<MutationResponse>, AdminError> {
    req.validate()?;

    let merchant = req.into_merchant();
    let id = state.merchant_service.insert(&merchant).await?;

    info!(merchant_id = id, name = %merchant.name, "Merchant created");

    Ok(Json(MutationResponse::new(id, "Merchant created successfully")))
}

/// 获取商户详情
///
/// GET /api/merchant/{id}
pub async fn get_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Merchant>, AdminError> {
    let id = parse_id(&id)?;
    let merchant = state.merchant_service.get_by_id(id).await?;
    Ok(Json(merchant))
}

/// 列出全部商户
///
/// GET /api/merchants
pub async fn list_merchants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Merchant>>, AdminError> {
    let merchants = state.merchant_service.list_all().await?;
    Ok(Json(merchants))
}

/// 更新商户（整体替换）
///
/// PUT /api/merchant/{id}
pub async fn update_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MerchantRequest>,
) -> Result<Json<MutationResponse>, AdminError> {
    let id = parse_id(&id)?;
    req.validate()?;

    let affected = state
        .merchant_service
        .update(id, &req.into_merchant())
        .await?;

    info!(merchant_id = id, rows_affected = affected, "Merchant updated");

    Ok(Json(MutationResponse::new(
        id,
        format!(
            "Merchant updated successfully. Total rows/record affected {}",
            affected
        ),
    )))
}

/// 删除商户
///
/// DELETE /api/deletemerchant/{id}
///
/// 不删除该商户下的成员；ID 不存在时同样返回成功
pub async fn delete_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, AdminError> {
    let id = parse_id(&id)?;
    let affected = state.merchant_service.delete(id).await?;

    info!(merchant_id = id, rows_affected = affected, "Merchant deleted");

    Ok(Json(MutationResponse::new(
        id,
        format!(
            "Merchant deleted successfully. Total rows/record affected {}",
            affected
        ),
    )))
}
