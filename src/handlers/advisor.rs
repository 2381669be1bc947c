// src/handlers/advisor.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireCapability, UserOrAdmin},
    models::advisor::{AnalysisPayload, AnalysisResponse},
};

// POST /api/workload-analysis: a falha do serviço remoto nunca chega
// aqui: o serviço sempre devolve algum texto de análise.
#[utoipa::path(
    post,
    path = "/api/workload-analysis",
    tag = "Advisor",
    request_body = AnalysisPayload,
    responses(
        (status = 200, description = "Texto de análise (remoto ou local)", body = AnalysisResponse),
        (status = 400, description = "Pergunta ausente")
    ),
    security(("session_jwt" = []))
)]
pub async fn workload_analysis(
    State(app_state): State<AppState>,
    _cap: RequireCapability<UserOrAdmin>,
    Json(payload): Json<AnalysisPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let query = payload.query.as_deref().unwrap_or_default();
    tracing::info!("🤖 Processando consulta do assistente: {}", query);

    let analysis = app_state.advisor_service.analyze(query).await;

    Ok(Json(AnalysisResponse {
        success: true,
        analysis,
    }))
}
