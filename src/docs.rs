// src/docs.rs

use axum::Json;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::get_current_user,
        handlers::auth::list_roles,

        // --- Employees ---
        handlers::directory::create_employee,
        handlers::directory::list_employees,
        handlers::directory::update_employee,
        handlers::directory::delete_employee,

        // --- Projects ---
        handlers::directory::create_project,
        handlers::directory::list_projects,
        handlers::directory::update_project,

        // --- Departments ---
        handlers::directory::create_department,
        handlers::directory::list_departments,
        handlers::directory::update_department,
        handlers::directory::delete_department,

        // --- Efforts ---
        handlers::allocation::upsert_effort,
        handlers::allocation::list_efforts,
        handlers::allocation::delete_all_efforts,
        handlers::allocation::clear_view,

        // --- Assignments ---
        handlers::allocation::create_assignment,
        handlers::allocation::list_assignments,
        handlers::allocation::delete_assignment,

        // --- Admin ---
        handlers::admin::list_users,
        handlers::admin::upsert_user,
        handlers::admin::update_user,
        handlers::admin::delete_user,

        // --- Advisor / Diagnostics ---
        handlers::advisor::workload_analysis,
        handlers::query::run_query,
    ),
    components(
        schemas(
            models::auth::Role,
            models::auth::SessionUser,
            models::auth::UserRole,
            models::auth::UpsertUserRolePayload,
            models::auth::UpdateUserRolePayload,
            models::org::Employee,
            models::org::CreateEmployeePayload,
            models::org::UpdateEmployeePayload,
            models::org::Project,
            models::org::CreateProjectPayload,
            models::org::Department,
            models::org::DepartmentPayload,
            models::allocation::Effort,
            models::allocation::UpsertEffortPayload,
            models::allocation::ClearViewPayload,
            models::allocation::ProjectAssignment,
            models::allocation::AssignmentPayload,
            models::advisor::AnalysisPayload,
            models::advisor::AnalysisResponse,
            models::advisor::SqlQueryPayload,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

// GET /api/docs/openapi.json
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
