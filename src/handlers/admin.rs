// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{AdminOnly, RequireCapability},
    models::auth::{UpdateUserRolePayload, UpsertUserRolePayload, UserRole},
};

// GET /api/admin/users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "Usuários e papéis cadastrados", body = Vec<UserRole>),
        (status = 403, description = "Exige papel admin")
    ),
    security(("session_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.rbac_service.list_users().await?;

    Ok(Json(users))
}

// POST /api/admin/users: insere ou troca o papel de um e-mail
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "Admin",
    request_body = UpsertUserRolePayload,
    responses(
        (status = 200, description = "Papel gravado", body = UserRole),
        (status = 400, description = "E-mail ou papel inválido")
    ),
    security(("session_jwt" = []))
)]
pub async fn upsert_user(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AdminOnly>,
    Json(payload): Json<UpsertUserRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .rbac_service
        .upsert_user(
            payload.email.as_deref().unwrap_or_default(),
            payload.role.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({ "success": true, "user": user })))
}

// PUT /api/admin/users/{email}
#[utoipa::path(
    put,
    path = "/api/admin/users/{email}",
    tag = "Admin",
    request_body = UpdateUserRolePayload,
    responses(
        (status = 200, description = "Papel atualizado", body = UserRole),
        (status = 400, description = "Papel inválido"),
        (status = 404, description = "E-mail não cadastrado")
    ),
    security(("session_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AdminOnly>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .rbac_service
        .update_user(&email, payload.role.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(json!({ "success": true, "user": user })))
}

// DELETE /api/admin/users/{email}
#[utoipa::path(
    delete,
    path = "/api/admin/users/{email}",
    tag = "Admin",
    responses(
        (status = 200, description = "Acesso revogado"),
        (status = 404, description = "E-mail não cadastrado")
    ),
    security(("session_jwt" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AdminOnly>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.rbac_service.delete_user(&email).await?;

    Ok(Json(json!({ "success": true, "deleted": deleted })))
}
