// src/models/org.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- FUNCIONÁRIOS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub department: String,
    pub employee_number: Option<String>,
}

// Os campos obrigatórios são Option + `required` para que a ausência da
// chave caia na validação (400 com mensagem) e não na desserialização.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeePayload {
    #[validate(required(message = "O nome é obrigatório."), length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,

    #[schema(example = "ada@empresa.com")]
    pub email: Option<String>,

    #[validate(required(message = "O departamento é obrigatório."), length(min = 1, message = "O departamento é obrigatório."))]
    #[schema(example = "Engineering")]
    pub department: Option<String>,

    #[schema(example = "E-0042")]
    pub employee_number: Option<String>,
}

// Atualização parcial: só os campos presentes entram no UPDATE.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub employee_number: Option<String>,
}

impl UpdateEmployeePayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.employee_number.is_none()
    }
}

// --- PROJETOS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    // A coluna chama-se "type"; no Rust usamos `kind` e renomeamos no JSON.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    #[validate(required(message = "O nome é obrigatório."), length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Search")]
    pub name: Option<String>,

    // Ausente vira "project"
    #[serde(rename = "type")]
    #[schema(example = "project")]
    pub kind: Option<String>,
}

// --- DEPARTAMENTOS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    #[validate(required(message = "O nome do departamento é obrigatório."), length(min = 1, message = "O nome do departamento é obrigatório."))]
    #[schema(example = "Engineering")]
    pub name: Option<String>,
}
