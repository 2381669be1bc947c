// src/db/assignment_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::allocation::ProjectAssignment};

#[derive(Clone)]
pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Criação idempotente: o par (funcionário, projeto) é único e o
    /// conflito é um no-op, não um erro.
    pub async fn create(&self, employee_id: i64, project_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO project_assignments (employee_id, project_id)
            VALUES (?, ?)
            ON CONFLICT(employee_id, project_id) DO NOTHING
            "#,
        )
        .bind(employee_id)
        .bind(project_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<ProjectAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, ProjectAssignment>(
            "SELECT id, employee_id, project_id FROM project_assignments",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn delete_by_pair<'e, E>(
        &self,
        executor: E,
        employee_id: i64,
        project_id: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result =
            sqlx::query("DELETE FROM project_assignments WHERE employee_id = ? AND project_id = ?")
                .bind(employee_id)
                .bind(project_id)
                .execute(executor)
                .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_employee<'e, E>(
        &self,
        executor: E,
        employee_id: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM project_assignments WHERE employee_id = ?")
            .bind(employee_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
