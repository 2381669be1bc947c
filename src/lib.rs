// src/lib.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

// Migrações embutidas, compartilhadas pelos binários e pelos testes
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Monta o router completo sobre o estado injetado.
pub fn app(app_state: AppState) -> Router {
    // Rotas públicas do fluxo de login
    let auth_routes = Router::new()
        .route("/", get(handlers::auth::root))
        .route("/home", get(handlers::auth::home))
        .route("/auth/google", get(handlers::auth::google_login))
        .route("/auth/google/callback", get(handlers::auth::google_callback))
        .route("/logout", get(handlers::auth::logout));

    // Rotas de API protegidas: o auth_guard resolve a sessão e cada
    // endpoint declara o conjunto de capacidades exigido no handler.
    let api_routes = Router::new()
        .route("/user", get(handlers::auth::get_current_user))
        .route("/roles", get(handlers::auth::list_roles))
        .route(
            "/employees",
            get(handlers::directory::list_employees).post(handlers::directory::create_employee),
        )
        .route(
            "/employees/{id}",
            put(handlers::directory::update_employee).delete(handlers::directory::delete_employee),
        )
        .route(
            "/projects",
            get(handlers::directory::list_projects).post(handlers::directory::create_project),
        )
        .route("/projects/{id}", put(handlers::directory::update_project))
        .route(
            "/departments",
            get(handlers::directory::list_departments)
                .post(handlers::directory::create_department),
        )
        .route(
            "/departments/{id}",
            put(handlers::directory::update_department)
                .delete(handlers::directory::delete_department),
        )
        .route(
            "/efforts",
            get(handlers::allocation::list_efforts)
                .post(handlers::allocation::upsert_effort)
                .delete(handlers::allocation::delete_all_efforts),
        )
        .route(
            "/efforts/clear-view",
            delete(handlers::allocation::clear_view),
        )
        .route(
            "/project-assignments",
            get(handlers::allocation::list_assignments)
                .post(handlers::allocation::create_assignment)
                .delete(handlers::allocation::delete_assignment),
        )
        .route(
            "/admin/users",
            get(handlers::admin::list_users).post(handlers::admin::upsert_user),
        )
        .route(
            "/admin/users/{email}",
            put(handlers::admin::update_user).delete(handlers::admin::delete_user),
        )
        .route("/query", post(handlers::query::run_query))
        .route(
            "/workload-analysis",
            post(handlers::advisor::workload_analysis),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/docs/openapi.json", get(docs::serve_openapi))
        .nest("/api", api_routes)
        .merge(auth_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
