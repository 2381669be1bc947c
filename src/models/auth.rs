// src/models/auth.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Os três níveis de acesso do sistema. A coluna `role` é TEXT no banco,
// então o derive de sqlx::Type mapeia direto para a string minúscula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Viewer,
}

impl Role {
    // A ordem aqui é a ordem exibida em GET /api/roles
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Viewer => "viewer",
        }
    }

    /// Converte a string vinda do cliente. Qualquer valor fora do enum é
    /// recusado na validação do payload, antes de tocar no banco.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

// A identidade transitória da sessão: montada no callback do OAuth e
// carregada no token. Não é re-derivada da tabela a cada requisição.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: Role,
}

// As claims do token de sessão
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        SessionUser {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            photo: claims.photo,
            role: claims.role,
        }
    }
}

// O perfil devolvido pelo endpoint de userinfo do provedor.
// Só extraímos o primeiro e-mail e a primeira foto.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthProfile {
    #[serde(alias = "sub")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(alias = "picture")]
    pub photo: Option<String>,
}

// Uma linha da tabela user_roles
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Payload do upsert de papel (POST /api/admin/users)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRolePayload {
    #[validate(required(message = "O e-mail é obrigatório."), email(message = "E-mail inválido."))]
    #[schema(example = "ana@empresa.com")]
    pub email: Option<String>,

    // Validado contra o enum no serviço; "manager" etc. vira 400.
    #[schema(example = "user")]
    pub role: Option<String>,
}

// Payload do PUT /api/admin/users/{email}
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRolePayload {
    #[schema(example = "viewer")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aceita_somente_os_tres_papeis() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("viewer"), Some(Role::Viewer));
        assert_eq!(Role::parse("manager"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializa_em_minusculas() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let back: Role = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(back, Role::Viewer);
    }
}
