// src/models/advisor.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Pergunta em texto livre para o assistente
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[validate(required(message = "A pergunta é obrigatória."), length(min = 1, message = "A pergunta é obrigatória."))]
    #[schema(example = "Which employees have available capacity?")]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: String,
}

// Consulta diagnóstica (POST /api/query): somente leitura
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SqlQueryPayload {
    #[validate(required(message = "A consulta é obrigatória."), length(min = 1, message = "A consulta é obrigatória."))]
    #[schema(example = "SELECT name, department FROM employees")]
    pub query: Option<String>,
}

// --- CONTRATO DO SERVIÇO REMOTO DE COMPLETIONS ---

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: String,
}
