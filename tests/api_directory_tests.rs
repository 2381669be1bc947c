// tests/api_directory_tests.rs
//
// Funcionários, projetos e departamentos: o cenário ponta a ponta do
// upsert de esforço, a cascata do delete e os sinais de conflito.

mod common;

use axum::http::StatusCode;
use common::*;
use resource_allocation::models::auth::Role;
use serde_json::json;

#[tokio::test]
async fn cenario_completo_upsert_de_esforco_sobrescreve() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    // Departamento -> funcionário -> projeto -> vínculo
    let (status, _body) = send(
        &app,
        request(
            "POST",
            "/api/departments",
            Some(&token),
            Some(json!({ "name": "Engineering" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

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
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let employee_id = body["id"].as_i64().expect("id do funcionário");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({ "name": "Search" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let project_id = body["id"].as_i64().expect("id do projeto");

    let (status, _body) = send(
        &app,
        request(
            "POST",
            "/api/project-assignments",
            Some(&token),
            Some(json!({ "employeeId": employee_id, "projectId": project_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Primeiro upsert e depois a sobrescrita da mesma chave
    for (effort, days) in [(0.5, 2), (0.8, 4)] {
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/efforts",
                Some(&token),
                Some(json!({
                    "employeeId": employee_id,
                    "projectId": project_id,
                    "week": 1,
                    "effort": effort,
                    "days": days,
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    // Exatamente uma linha, com os valores da segunda gravação
    let (status, body) = send(&app, request("GET", "/api/efforts", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("lista de esforços");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employeeId"], employee_id);
    assert_eq!(rows[0]["week"], 1);
    assert_eq!(rows[0]["effort"], 0.8);
    assert_eq!(rows[0]["days"], 4);
}

#[tokio::test]
async fn funcionario_sem_departamento_e_recusado_com_400() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/employees",
            Some(&token),
            Some(json!({ "name": "Ada" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["department"].is_array());
}

#[tokio::test]
async fn departamento_duplicado_gera_conflito_e_nao_500() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    let payload = json!({ "name": "Engineering" });
    let (status, _body) = send(
        &app,
        request("POST", "/api/departments", Some(&token), Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request("POST", "/api/departments", Some(&token), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Já existe um departamento chamado 'Engineering'."
    );
}

#[tokio::test]
async fn renomear_departamento_para_nome_existente_tambem_conflita() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    for name in ["Engineering", "Design"] {
        send(
            &app,
            request(
                "POST",
                "/api/departments",
                Some(&token),
                Some(json!({ "name": name })),
            ),
        )
        .await;
    }

    let (_status, body) = send(&app, request("GET", "/api/departments", Some(&token), None)).await;
    let design_id = body
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == "Design")
        .and_then(|d| d["id"].as_i64())
        .expect("id do Design");

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/departments/{}", design_id),
            Some(&token),
            Some(json!({ "name": "Engineering" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("Já existe")
    );
}

#[tokio::test]
async fn atualizacao_parcial_de_funcionario() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    let (_status, body) = send(
        &app,
        request(
            "POST",
            "/api/employees",
            Some(&token),
            Some(json!({ "name": "Ada", "department": "Engineering" })),
        ),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    // Só o departamento muda; o nome fica
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/employees/{}", id),
            Some(&token),
            Some(json!({ "department": "Research" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);

    let (_status, body) = send(&app, request("GET", "/api/employees", Some(&token), None)).await;
    let row = &body.as_array().unwrap()[0];
    assert_eq!(row["name"], "Ada");
    assert_eq!(row["department"], "Research");

    // Payload vazio é 400; id inexistente é 404
    let (status, _body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/employees/{}", id),
            Some(&token),
            Some(json!({})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _body) = send(
        &app,
        request(
            "PUT",
            "/api/employees/9999",
            Some(&token),
            Some(json!({ "name": "Ninguém" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_de_funcionario_cascateia_esforcos_e_vinculos() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    let (_s, body) = send(
        &app,
        request(
            "POST",
            "/api/employees",
            Some(&token),
            Some(json!({ "name": "Ada", "department": "Engineering" })),
        ),
    )
    .await;
    let employee_id = body["id"].as_i64().unwrap();

    let (_s, body) = send(
        &app,
        request(
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({ "name": "Search" })),
        ),
    )
    .await;
    let project_id = body["id"].as_i64().unwrap();

    send(
        &app,
        request(
            "POST",
            "/api/project-assignments",
            Some(&token),
            Some(json!({ "employeeId": employee_id, "projectId": project_id })),
        ),
    )
    .await;
    send(
        &app,
        request(
            "POST",
            "/api/efforts",
            Some(&token),
            Some(json!({
                "employeeId": employee_id,
                "projectId": project_id,
                "week": 1,
                "effort": 1.0,
                "days": 5,
            })),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/employees/{}", employee_id),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 1);

    // Nenhuma referência órfã sobra
    for uri in ["/api/employees", "/api/efforts", "/api/project-assignments"] {
        let (_status, body) = send(&app, request("GET", uri, Some(&token), None)).await;
        assert_eq!(body.as_array().map(Vec::len), Some(0), "sobrou linha em {}", uri);
    }
}

#[tokio::test]
async fn projeto_sem_tipo_recebe_o_padrao() {
    let (app, state) = test_app().await;
    let token = token_for(&state, Role::User);

    send(
        &app,
        request(
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({ "name": "Search" })),
        ),
    )
    .await;

    let (_status, body) = send(&app, request("GET", "/api/projects", Some(&token), None)).await;
    assert_eq!(body.as_array().unwrap()[0]["type"], "project");
}
