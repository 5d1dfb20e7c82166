//! 成员管理 API 处理器
//!
//! 成员的 CRUD 以及商户成员分页。邮箱冲突返回 409。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use merchant_management::Member;
use tracing::info;

use super::parse_id;
use crate::{
    dto::{MemberPageQuery, MemberRequest, MutationResponse},
    error::AdminError,
    state::AppState,
};

/// 创建成员
///
/// POST /api/member/newmember
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MutationResponse>, AdminError> {
    let member = req.into_member();
    let id = state.member_service.insert(&member).await?;

    info!(
        member_id = id,
        merchant_id = member.merchant_id,
        email = %member.email,
        "Member created"
    );

    Ok(Json(MutationResponse::new(id, "Member created successfully.")))
}

/// 获取成员详情
///
/// GET /api/member/{memberid}
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<Member>, AdminError> {
    let member_id = parse_id(&member_id)?;
    let member = state.member_service.get_by_id(member_id).await?;
    Ok(Json(member))
}

/// 更新成员（整体替换，包括所属商户）
///
/// PUT /api/member/{memberid}
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MutationResponse>, AdminError> {
    let member_id = parse_id(&member_id)?;
    let affected = state
        .member_service
        .update(member_id, &req.into_member())
        .await?;

    info!(member_id, rows_affected = affected, "Member updated");

    Ok(Json(MutationResponse::new(
        member_id,
        "Member updated successfully.",
    )))
}

/// 删除成员
///
/// DELETE /api/deletemember/{memberid}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<MutationResponse>, AdminError> {
    let member_id = parse_id(&member_id)?;
    let affected = state.member_service.delete(member_id).await?;

    info!(member_id, rows_affected = affected, "Member deleted");

    Ok(Json(MutationResponse::new(
        member_id,
        "Deleted a member successfully",
    )))
}

/// 商户成员分页
///
/// GET /api/merchant/{id}/allmembers?page=&size=
pub async fn list_merchant_members(
    State(state): State<AppState>,
    Path(merchant_id): Path<String>,
    Query(query): Query<MemberPageQuery>,
) -> Result<Json<Vec<Member>>, AdminError> {
    let merchant_id = parse_id(&merchant_id)?;
    let (page, size) = (query.page(), query.size());

    let members = state
        .member_service
        .list_page(merchant_id, page, size)
        .await?;

    info!(merchant_id, page, size, returned = members.len(), "Members listed");

    Ok(Json(members))
}
