// src/models/allocation.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- ESFORÇOS SEMANAIS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Effort {
    pub id: i64,
    pub employee_id: i64,
    pub project_id: i64,
    pub week: i64,
    // Fração da semana (ex: 0.5); o merge do upsert sobrescreve este valor.
    pub effort: f64,
    pub days: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEffortPayload {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = 1)]
    pub project_id: i64,
    #[schema(example = 32)]
    pub week: i64,
    #[schema(example = 0.5)]
    pub effort: f64,
    #[schema(example = 2)]
    pub days: i64,
}

// Filtro do DELETE /api/efforts/clear-view: dois conjuntos independentes.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearViewPayload {
    #[validate(required(message = "employeeIds é obrigatório."), length(min = 1, message = "employeeIds não pode ser vazio."))]
    pub employee_ids: Option<Vec<i64>>,

    #[validate(required(message = "weekValues é obrigatório."), length(min = 1, message = "weekValues não pode ser vazio."))]
    pub week_values: Option<Vec<i64>>,
}

// --- VÍNCULOS FUNCIONÁRIO × PROJETO ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub id: i64,
    pub employee_id: i64,
    pub project_id: i64,
}

// Serve tanto para criar quanto para remover um vínculo
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPayload {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = 1)]
    pub project_id: i64,
}
