// src/handlers/allocation.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{AnyAuthenticated, RequireCapability, UserOrAdmin},
    models::allocation::{
        AssignmentPayload, ClearViewPayload, Effort, ProjectAssignment, UpsertEffortPayload,
    },
};

// =============================================================================
//  ESFORÇOS SEMANAIS
// =============================================================================

// POST /api/efforts
#[utoipa::path(
    post,
    path = "/api/efforts",
    tag = "Efforts",
    request_body = UpsertEffortPayload,
    responses(
        (status = 200, description = "Esforço gravado; chave existente é sobrescrita")
    ),
    security(("session_jwt" = []))
)]
pub async fn upsert_effort(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<UpsertEffortPayload>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "Gravando esforço: funcionário {} / projeto {} / semana {}",
        payload.employee_id,
        payload.project_id,
        payload.week
    );

    app_state
        .allocation_service
        .upsert_effort(
            payload.employee_id,
            payload.project_id,
            payload.week,
            payload.effort,
            payload.days,
        )
        .await?;

    Ok(Json(json!({ "success": true })))
}

// GET /api/efforts
#[utoipa::path(
    get,
    path = "/api/efforts",
    tag = "Efforts",
    responses(
        (status = 200, description = "Todos os esforços", body = Vec<Effort>)
    ),
    security(("session_jwt" = []))
)]
pub async fn list_efforts(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AnyAuthenticated>,
) -> Result<impl IntoResponse, AppError> {
    let efforts = app_state.allocation_service.list_efforts().await?;

    Ok(Json(efforts))
}

// DELETE /api/efforts
#[utoipa::path(
    delete,
    path = "/api/efforts",
    tag = "Efforts",
    responses(
        (status = 200, description = "Todos os esforços removidos")
    ),
    security(("session_jwt" = []))
)]
pub async fn delete_all_efforts(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.allocation_service.clear_all_efforts().await?;

    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

// DELETE /api/efforts/clear-view: remove pelo filtro funcionários × semanas
#[utoipa::path(
    delete,
    path = "/api/efforts/clear-view",
    tag = "Efforts",
    request_body = ClearViewPayload,
    responses(
        (status = 200, description = "Esforços do filtro removidos"),
        (status = 400, description = "employeeIds ou weekValues ausente")
    ),
    security(("session_jwt" = []))
)]
pub async fn clear_view(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<ClearViewPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let deleted = app_state
        .allocation_service
        .clear_view(
            payload.employee_ids.as_deref().unwrap_or_default(),
            payload.week_values.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

// =============================================================================
//  VÍNCULOS FUNCIONÁRIO × PROJETO
// =============================================================================

// POST /api/project-assignments
#[utoipa::path(
    post,
    path = "/api/project-assignments",
    tag = "Assignments",
    request_body = AssignmentPayload,
    responses(
        (status = 201, description = "Vínculo criado (duplicado é no-op)")
    ),
    security(("session_jwt" = []))
)]
pub async fn create_assignment(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<AssignmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .allocation_service
        .create_assignment(payload.employee_id, payload.project_id)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}

// GET /api/project-assignments
#[utoipa::path(
    get,
    path = "/api/project-assignments",
    tag = "Assignments",
    responses(
        (status = 200, description = "Todos os vínculos", body = Vec<ProjectAssignment>)
    ),
    security(("session_jwt" = []))
)]
pub async fn list_assignments(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AnyAuthenticated>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = app_state.allocation_service.list_assignments().await?;

    Ok(Json(assignments))
}

// DELETE /api/project-assignments: também remove os esforços do par
#[utoipa::path(
    delete,
    path = "/api/project-assignments",
    tag = "Assignments",
    request_body = AssignmentPayload,
    responses(
        (status = 200, description = "Vínculo e esforços do par removidos")
    ),
    security(("session_jwt" = []))
)]
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<AssignmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .allocation_service
        .delete_assignment(payload.employee_id, payload.project_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}
