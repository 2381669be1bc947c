// src/handlers/query.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireCapability, UserOrAdmin},
    models::advisor::SqlQueryPayload,
};

// POST /api/query: válvula de escape diagnóstica do chat, limitada a
// uma instrução de leitura.
#[utoipa::path(
    post,
    path = "/api/query",
    tag = "Diagnostics",
    request_body = SqlQueryPayload,
    responses(
        (status = 200, description = "Linhas da consulta"),
        (status = 400, description = "Instrução que não é de leitura")
    ),
    security(("session_jwt" = []))
)]
pub async fn run_query(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<SqlQueryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let query = payload.query.as_deref().unwrap_or_default();
    tracing::info!("Executando consulta diagnóstica: {}", query);

    let rows = app_state.query_repo.run_read_only(query).await?;

    Ok(Json(json!({ "success": true, "data": rows })))
}
