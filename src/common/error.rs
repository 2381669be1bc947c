// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante corresponde a um sinal distinto para o cliente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Papel inválido")]
    InvalidRole,

    #[error("Nenhum campo para atualizar")]
    NoFieldsToUpdate,

    #[error("Consulta não é somente leitura")]
    QueryNotReadOnly,

    #[error("Token de sessão inválido ou ausente")]
    InvalidToken,

    #[error("Permissões insuficientes")]
    InsufficientPermissions,

    // E-mail sem linha em user_roles: o login falha, nunca cria conta padrão
    #[error("Acesso negado para este e-mail")]
    RoleNotAssigned,

    #[error("Funcionário não encontrado")]
    EmployeeNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    // Violação de chave única traduzida para mensagem de domínio
    // (ex: nome de departamento duplicado)
    #[error("{0}")]
    UniqueConstraintViolation(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Falha ao falar com o serviço externo")]
    RemoteService(#[from] reqwest::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidRole => (
                StatusCode::BAD_REQUEST,
                "Papel inválido. Use admin, user ou viewer.".to_string(),
            ),
            AppError::NoFieldsToUpdate => (
                StatusCode::BAD_REQUEST,
                "Nenhum campo para atualizar.".to_string(),
            ),
            AppError::QueryNotReadOnly => (
                StatusCode::BAD_REQUEST,
                "Apenas consultas de leitura (SELECT) são permitidas.".to_string(),
            ),
            AppError::UniqueConstraintViolation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de sessão inválido ou ausente.".to_string(),
            ),
            AppError::InsufficientPermissions => (
                StatusCode::FORBIDDEN,
                "Acesso negado. Permissões insuficientes.".to_string(),
            ),
            AppError::RoleNotAssigned => (
                StatusCode::FORBIDDEN,
                "Acesso negado. Contate o administrador.".to_string(),
            ),
            AppError::EmployeeNotFound => (
                StatusCode::NOT_FOUND,
                "Funcionário não encontrado.".to_string(),
            ),
            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }

            // Todos os outros erros (DatabaseError etc.) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
