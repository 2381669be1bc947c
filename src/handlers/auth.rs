// src/handlers/auth.rs

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedUser, SESSION_COOKIE, session_token},
    models::auth::{Role, SessionUser},
};

// Cookie temporário com o state anti-CSRF do fluxo OAuth
const STATE_COOKIE: &str = "oauth_state";

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn login_redirect(error: &str) -> Redirect {
    Redirect::to(&format!("/login.html?error={}", error))
}

// GET /auth/google: manda o navegador para a tela de consentimento
pub async fn google_login(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let state = Uuid::new_v4().to_string();
    let url = app_state.auth_service.authorize_url(&state)?;

    let mut cookie = Cookie::new(STATE_COOKIE, state);
    cookie.set_path("/");
    cookie.set_http_only(true);

    Ok((jar.add(cookie), Redirect::to(&url)))
}

// GET /auth/google/callback: troca o código, resolve o papel e abre a
// sessão. Qualquer falha volta para a tela de login com o indicador de
// erro, sem criar sessão nem conta padrão.
pub async fn google_callback(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Response {
    let stored_state = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    let mut state_removal = Cookie::from(STATE_COOKIE);
    state_removal.set_path("/");
    let jar = jar.remove(state_removal);

    let code = match (params.error.as_deref(), params.code) {
        (None, Some(code)) if params.state.is_some() && params.state == stored_state => code,
        _ => return (jar, login_redirect("access_denied")).into_response(),
    };

    let profile = match app_state.auth_service.exchange_code(&code).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Falha na troca do código OAuth: {}", e);
            return (jar, login_redirect("access_denied")).into_response();
        }
    };

    // "Não encontrado" e "erro de banco" são sinais distintos
    let role = match app_state.auth_service.resolve_role(&profile.email).await {
        Ok(role) => role,
        Err(AppError::RoleNotAssigned) => {
            tracing::warn!("Login recusado: {} sem papel atribuído", profile.email);
            return (jar, login_redirect("access_denied")).into_response();
        }
        Err(e) => {
            tracing::error!("Erro ao resolver papel no login: {}", e);
            return (jar, login_redirect("database_error")).into_response();
        }
    };

    let user = app_state.auth_service.build_session(profile, role);
    let token = match app_state.auth_service.create_token(&user) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Falha ao emitir o token de sessão: {}", e);
            return (jar, login_redirect("access_denied")).into_response();
        }
    };

    tracing::info!("🔐 Sessão iniciada para {} ({})", user.email, user.role.as_str());

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);

    (jar.add(cookie), Redirect::to("/index.html")).into_response()
}

// GET /logout: encerra a sessão e volta para o login
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Redirect::to("/login.html"))
}

// GET /: a raiz sempre leva ao login
pub async fn root() -> Redirect {
    Redirect::to("/login.html")
}

// GET /home: com sessão válida vai para o painel, senão para o login
pub async fn home(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Redirect {
    let authenticated = session_token(&headers, &jar)
        .and_then(|token| app_state.auth_service.validate_token(&token).ok())
        .is_some();

    if authenticated {
        Redirect::to("/index.html")
    } else {
        Redirect::to("/login.html")
    }
}

// GET /api/user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Auth",
    responses(
        (status = 200, description = "Identidade da sessão atual", body = SessionUser),
        (status = 401, description = "Sem sessão válida")
    ),
    security(("session_jwt" = []))
)]
pub async fn get_current_user(AuthenticatedUser(user): AuthenticatedUser) -> Json<SessionUser> {
    Json(user)
}

// GET /api/roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "Auth",
    responses(
        (status = 200, description = "Os três papéis do sistema", body = [String])
    ),
    security(("session_jwt" = []))
)]
pub async fn list_roles(_user: AuthenticatedUser) -> Json<Vec<&'static str>> {
    Json(Role::ALL.iter().map(|role| role.as_str()).collect())
}
