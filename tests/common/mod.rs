// tests/common/mod.rs
//
// Infraestrutura compartilhada: aplicação completa sobre um banco em
// memória já migrado, mais helpers de requisição autenticada.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use resource_allocation::{
    MIGRATOR, app,
    config::{AppConfig, AppState, OAuthConfig, RemoteCompletionConfig},
    models::auth::{Role, SessionUser},
};

pub const TEST_SECRET: &str = "segredo-de-teste";

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        oauth: OAuthConfig::google(
            "client-id-de-teste".to_string(),
            "client-secret-de-teste".to_string(),
            "http://localhost:5000/auth/google/callback".to_string(),
        ),
        completion: None,
    }
}

/// Config com um serviço remoto inalcançável, para exercitar o fallback.
#[allow(dead_code)]
pub fn test_config_with_unreachable_remote() -> AppConfig {
    let mut config = test_config();
    config.completion = Some(RemoteCompletionConfig {
        api_url: "http://127.0.0.1:9/chat/completions".to_string(),
        api_key: "chave-invalida".to_string(),
        model: "gpt-4o-mini".to_string(),
    });
    config
}

pub async fn test_state(config: AppConfig) -> AppState {
    // Uma única conexão: cada conexão nova de :memory: abriria um banco vazio
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool em memória");

    MIGRATOR.run(&pool).await.expect("migrações");

    AppState::with_pool(config, pool)
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state(test_config()).await;
    (app(state.clone()), state)
}

/// Token de sessão assinado para um papel qualquer.
pub fn token_for(state: &AppState, role: Role) -> String {
    let user = SessionUser {
        id: "100001".to_string(),
        name: "Pessoa de Teste".to_string(),
        email: format!("{}@teste.com", role.as_str()),
        photo: None,
        role,
    };
    state.auth_service.create_token(&user).expect("token de teste")
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

/// Dispara a requisição e devolve (status, corpo JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("resposta");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("corpo")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

/// Variante que preserva a resposta inteira (para inspecionar redirects).
#[allow(dead_code)]
pub async fn send_raw(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("resposta")
}
