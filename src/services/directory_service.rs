// src/services/directory_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{
        AssignmentRepository, DepartmentRepository, EffortRepository, EmployeeRepository,
        ProjectRepository,
    },
    models::org::{Department, Employee, Project, UpdateEmployeePayload},
};

// Operações sobre funcionários, projetos e departamentos.
// A remoção de funcionário é a única com escopo transacional próprio.
#[derive(Clone)]
pub struct DirectoryService {
    employee_repo: EmployeeRepository,
    project_repo: ProjectRepository,
    department_repo: DepartmentRepository,
    effort_repo: EffortRepository,
    assignment_repo: AssignmentRepository,
    pool: SqlitePool,
}

impl DirectoryService {
    pub fn new(
        employee_repo: EmployeeRepository,
        project_repo: ProjectRepository,
        department_repo: DepartmentRepository,
        effort_repo: EffortRepository,
        assignment_repo: AssignmentRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            employee_repo,
            project_repo,
            department_repo,
            effort_repo,
            assignment_repo,
            pool,
        }
    }

    // --- FUNCIONÁRIOS ---

    pub async fn create_employee(
        &self,
        name: &str,
        email: Option<&str>,
        department: &str,
        employee_number: Option<&str>,
    ) -> Result<i64, AppError> {
        self.employee_repo
            .create(name, email, department, employee_number)
            .await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.employee_repo.list().await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        fields: &UpdateEmployeePayload,
    ) -> Result<u64, AppError> {
        self.employee_repo.update(id, fields).await
    }

    /// Cascata transacional: esforços -> vínculos -> funcionário.
    /// Falha em qualquer passo desfaz os três.
    pub async fn delete_employee(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        self.effort_repo.delete_by_employee(&mut *tx, id).await?;
        self.assignment_repo.delete_by_employee(&mut *tx, id).await?;
        let deleted = self.employee_repo.delete(&mut *tx, id).await?;

        tx.commit().await?;

        Ok(deleted)
    }

    // --- PROJETOS ---

    pub async fn create_project(&self, name: &str, kind: Option<&str>) -> Result<i64, AppError> {
        // Tipo ausente vira "project"
        self.project_repo
            .create(name, kind.unwrap_or("project"))
            .await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list().await
    }

    pub async fn update_project(
        &self,
        id: i64,
        name: &str,
        kind: Option<&str>,
    ) -> Result<u64, AppError> {
        self.project_repo
            .update(id, name, kind.unwrap_or("project"))
            .await
    }

    // --- DEPARTAMENTOS ---

    pub async fn create_department(&self, name: &str) -> Result<i64, AppError> {
        self.department_repo.create(name).await
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        self.department_repo.list().await
    }

    pub async fn rename_department(&self, id: i64, name: &str) -> Result<u64, AppError> {
        self.department_repo.rename(id, name).await
    }

    pub async fn delete_department(&self, id: i64) -> Result<u64, AppError> {
        self.department_repo.delete(id).await
    }
}
