// tests/api_auth_tests.rs
//
// Autenticação e autorização: sem sessão nada de dados; papel errado
// recebe 403 com sinal distinto do 401.

mod common;

use axum::http::{StatusCode, header};
use common::*;
use resource_allocation::models::auth::Role;
use serde_json::json;

#[tokio::test]
async fn rota_de_dados_sem_sessao_e_negada() {
    let (app, _state) = test_app().await;

    let (status, body) = send(&app, request("GET", "/api/employees", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn token_invalido_e_negado() {
    let (app, _state) = test_app().await;

    let (status, _body) = send(
        &app,
        request("GET", "/api/employees", Some("token-qualquer"), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn viewer_le_mas_nao_escreve() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Viewer);

    let (status, _body) = send(&app, request("GET", "/api/employees", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/employees",
            Some(&token),
            Some(json!({ "name": "Ada", "department": "Engineering" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Acesso negado. Permissões insuficientes.");
}

#[tokio::test]
async fn area_admin_exige_papel_admin() {
    let (app, state) = test_app().await;

    for role in [Role::Viewer, Role::User] {
        let token = token_for(&state, role);
        let (status, _body) =
            send(&app, request("GET", "/api/admin/users", Some(&token), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    let token = token_for(&state, Role::Admin);
    let (status, _body) = send(&app, request("GET", "/api/admin/users", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_user_devolve_a_identidade_da_sessao() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    let (status, body) = send(&app, request("GET", "/api/user", Some(&token), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "user@teste.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn api_roles_lista_os_tres_papeis() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Viewer);

    let (status, body) = send(&app, request("GET", "/api/roles", Some(&token), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["admin", "user", "viewer"]));
}

#[tokio::test]
async fn callback_sem_codigo_volta_para_o_login_com_erro() {
    let (app, _state) = test_app().await;

    let response = send_raw(&app, request("GET", "/auth/google/callback", None, None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/login.html?error=access_denied");
}

#[tokio::test]
async fn raiz_e_home_sem_sessao_redirecionam_para_o_login() {
    let (app, _state) = test_app().await;

    for uri in ["/", "/home"] {
        let response = send_raw(&app, request("GET", uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(location, "/login.html");
    }
}

#[tokio::test]
async fn home_com_sessao_vai_para_o_painel() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Viewer);

    let response = send_raw(&app, request("GET", "/home", Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/index.html");
}

#[tokio::test]
async fn health_e_publico() {
    let (app, _state) = test_app().await;

    let (status, _body) = send(&app, request("GET", "/api/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
}
