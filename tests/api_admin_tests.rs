// tests/api_admin_tests.rs
//
// Gestão de papéis: validação do enum, upsert que troca o papel e os
// sinais de 404 para e-mails não cadastrados.

mod common;

use axum::http::StatusCode;
use common::*;
use resource_allocation::models::auth::Role;
use serde_json::json;

#[tokio::test]
async fn papel_fora_do_enum_e_recusado() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Admin);

    for role in ["manager", "root", "ADMIN", ""] {
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/admin/users",
                Some(&token),
                Some(json!({ "email": "ana@empresa.com", "role": role })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "papel '{}'", role);
        assert_eq!(body["error"], "Papel inválido. Use admin, user ou viewer.");
    }
}

#[tokio::test]
async fn email_invalido_e_recusado_na_validacao() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Admin);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/admin/users",
            Some(&token),
            Some(json!({ "email": "nao-e-email", "role": "user" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["email"].is_array());
}

#[tokio::test]
async fn upsert_cria_e_depois_troca_o_papel() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Admin);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/admin/users",
            Some(&token),
            Some(json!({ "email": "ana@empresa.com", "role": "user" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "user");

    // Mesmo e-mail, papel novo: troca em vez de duplicar
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/admin/users",
            Some(&token),
            Some(json!({ "email": "ana@empresa.com", "role": "viewer" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "viewer");

    let (_status, body) = send(&app, request("GET", "/api/admin/users", Some(&token), None)).await;
    let users = body.as_array().expect("lista de usuários");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["role"], "viewer");
}

#[tokio::test]
async fn update_e_delete_de_email_desconhecido_dao_404() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Admin);

    let (status, _body) = send(
        &app,
        request(
            "PUT",
            "/api/admin/users/fantasma@empresa.com",
            Some(&token),
            Some(json!({ "role": "viewer" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _body) = send(
        &app,
        request(
            "DELETE",
            "/api/admin/users/fantasma@empresa.com",
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ciclo_completo_update_e_delete() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::Admin);

    send(
        &app,
        request(
            "POST",
            "/api/admin/users",
            Some(&token),
            Some(json!({ "email": "ana@empresa.com", "role": "viewer" })),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        request(
            "PUT",
            "/api/admin/users/ana@empresa.com",
            Some(&token),
            Some(json!({ "role": "admin" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "admin");

    let (status, body) = send(
        &app,
        request(
            "DELETE",
            "/api/admin/users/ana@empresa.com",
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 1);

    let (_status, body) = send(&app, request("GET", "/api/admin/users", Some(&token), None)).await;
    assert!(body.as_array().unwrap().is_empty());
}

// Sem linha em user_roles o login não resolve papel nenhum
#[tokio::test]
async fn resolucao_de_papel_nega_email_nao_cadastrado() {
    let (_app, state) = test_app().await;

    let result = state.auth_service.resolve_role("intruso@fora.com").await;
    assert!(result.is_err());

    state
        .rbac_service
        .upsert_user("ana@empresa.com", "admin")
        .await
        .expect("upsert");
    let role = state
        .auth_service
        .resolve_role("ana@empresa.com")
        .await
        .expect("papel resolvido");
    assert_eq!(role, Role::Admin);
}
