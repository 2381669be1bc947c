// src/handlers/directory.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{AnyAuthenticated, RequireCapability, UserOrAdmin},
    models::org::{
        CreateEmployeePayload, CreateProjectPayload, Department, DepartmentPayload, Employee,
        Project, UpdateEmployeePayload,
    },
};

// =============================================================================
//  FUNCIONÁRIOS
// =============================================================================

// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = CreateEmployeePayload,
    responses(
        (status = 201, description = "Funcionário criado"),
        (status = 400, description = "Nome ou departamento ausente")
    ),
    security(("session_jwt" = []))
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<CreateEmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let id = app_state
        .directory_service
        .create_employee(
            payload.name.as_deref().unwrap_or_default(),
            payload.email.as_deref(),
            payload.department.as_deref().unwrap_or_default(),
            payload.employee_number.as_deref(),
        )
        .await?;

    tracing::info!("Funcionário criado com id {}", id);

    Ok((StatusCode::CREATED, Json(json!({ "id": id, "success": true }))))
}

// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "Todos os funcionários", body = Vec<Employee>)
    ),
    security(("session_jwt" = []))
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AnyAuthenticated>,
) -> Result<impl IntoResponse, AppError> {
    let employees = app_state.directory_service.list_employees().await?;

    Ok(Json(employees))
}

// PUT /api/employees/{id}
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    request_body = UpdateEmployeePayload,
    responses(
        (status = 200, description = "Campos atualizados"),
        (status = 400, description = "Nenhum campo para atualizar"),
        (status = 404, description = "Funcionário não encontrado")
    ),
    security(("session_jwt" = []))
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state
        .directory_service
        .update_employee(id, &payload)
        .await?;

    Ok(Json(json!({ "success": true, "updated": updated })))
}

// DELETE /api/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    responses(
        (status = 200, description = "Funcionário e dependentes removidos em cascata")
    ),
    security(("session_jwt" = []))
)]
pub async fn delete_employee(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.directory_service.delete_employee(id).await?;

    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

// =============================================================================
//  PROJETOS
// =============================================================================

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 201, description = "Projeto criado")
    ),
    security(("session_jwt" = []))
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<CreateProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let id = app_state
        .directory_service
        .create_project(
            payload.name.as_deref().unwrap_or_default(),
            payload.kind.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Todos os projetos", body = Vec<Project>)
    ),
    security(("session_jwt" = []))
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AnyAuthenticated>,
) -> Result<impl IntoResponse, AppError> {
    let projects = app_state.directory_service.list_projects().await?;

    Ok(Json(projects))
}

// PUT /api/projects/{id}
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 200, description = "Projeto atualizado")
    ),
    security(("session_jwt" = []))
)]
pub async fn update_project(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state
        .directory_service
        .update_project(
            id,
            payload.name.as_deref().unwrap_or_default(),
            payload.kind.as_deref(),
        )
        .await?;

    Ok(Json(json!({ "success": true, "updated": updated })))
}

// =============================================================================
//  DEPARTAMENTOS
// =============================================================================

// POST /api/departments
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = "Departments",
    request_body = DepartmentPayload,
    responses(
        (status = 201, description = "Departamento criado"),
        (status = 400, description = "Nome ausente ou já existente")
    ),
    security(("session_jwt" = []))
)]
pub async fn create_department(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<DepartmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let id = app_state
        .directory_service
        .create_department(payload.name.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id, "success": true }))))
}

// GET /api/departments
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "Departments",
    responses(
        (status = 200, description = "Departamentos em ordem alfabética", body = Vec<Department>)
    ),
    security(("session_jwt" = []))
)]
pub async fn list_departments(
    State(app_state): State<AppState>,
    _cap: RequireCapability<AnyAuthenticated>,
) -> Result<impl IntoResponse, AppError> {
    let departments = app_state.directory_service.list_departments().await?;

    Ok(Json(departments))
}

// PUT /api/departments/{id}
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = "Departments",
    request_body = DepartmentPayload,
    responses(
        (status = 200, description = "Departamento renomeado"),
        (status = 400, description = "Nome ausente ou já existente")
    ),
    security(("session_jwt" = []))
)]
pub async fn update_department(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state
        .directory_service
        .rename_department(id, payload.name.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(json!({ "success": true, "updated": updated })))
}

// DELETE /api/departments/{id}
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = "Departments",
    responses(
        (status = 200, description = "Departamento removido")
    ),
    security(("session_jwt" = []))
)]
pub async fn delete_department(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.directory_service.delete_department(id).await?;

    Ok(Json(json!({ "success": true, "deleted": deleted })))
}
