// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{common::error::AppError, config::AppState, models::auth::SessionUser};

// Nome do cookie de sessão emitido no callback do OAuth
pub const SESSION_COOKIE: &str = "session";

/// Extrai o token de sessão: header Bearer (clientes de API) ou cookie
/// (navegador). O header tem precedência.
pub fn session_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    let bearer = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    bearer.or_else(|| jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string()))
}

// O middleware em si: valida o token e insere o usuário nos "extensions"
// da requisição. Sem token válido, a rota de API devolve 401.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(token) = session_token(request.headers(), &jar) {
        let user = app_state.auth_service.validate_token(&token)?;
        request.extensions_mut().insert(user);
        return Ok(next.run(request).await);
    }

    Err(AppError::InvalidToken)
}

// Extrator para obter o usuário autenticado diretamente nos handlers
pub struct AuthenticatedUser(pub SessionUser);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::InvalidToken)
    }
}
