// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::{Role, SessionUser},
};

/// 1. O Trait que define um conjunto de capacidades
pub trait CapabilityDef: Send + Sync + 'static {
    fn allows(role: Role) -> bool;
    fn name() -> &'static str;
}

/// 2. O Extractor (Guardião): cada endpoint declara o conjunto exigido
/// uma única vez na assinatura do handler.
pub struct RequireCapability<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts

impl<T, S> FromRequestParts<S> for RequireCapability<T>
where
    T: CapabilityDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o usuário autenticado (inserido pelo auth_guard).
        // Sem sessão é 401, distinto do 403 de papel insuficiente.
        let user = parts
            .extensions
            .get::<SessionUser>()
            .ok_or(AppError::InvalidToken)?;

        // B. Verifica o papel contra o conjunto exigido
        if !T::allows(user.role) {
            tracing::warn!(
                "Acesso negado: '{}' (papel {}) tentou uma rota '{}'",
                user.email,
                user.role.as_str(),
                T::name()
            );
            return Err(AppError::InsufficientPermissions);
        }

        Ok(RequireCapability(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS CONJUNTOS DE CAPACIDADES (TIPOS)
// ---

// Todas as rotas de leitura
pub struct AnyAuthenticated;
impl CapabilityDef for AnyAuthenticated {
    fn allows(_role: Role) -> bool {
        true
    }
    fn name() -> &'static str {
        "any-authenticated"
    }
}

// Todas as rotas de escrita (uniforme, inclusive as que o sistema antigo
// deixava sem guarda)
pub struct UserOrAdmin;
impl CapabilityDef for UserOrAdmin {
    fn allows(role: Role) -> bool {
        matches!(role, Role::User | Role::Admin)
    }
    fn name() -> &'static str {
        "user-or-admin"
    }
}

// Gestão de papéis de usuário
pub struct AdminOnly;
impl CapabilityDef for AdminOnly {
    fn allows(role: Role) -> bool {
        role == Role::Admin
    }
    fn name() -> &'static str {
        "admin-only"
    }
}
