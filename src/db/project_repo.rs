// src/db/project_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::org::Project};

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, kind: &str) -> Result<i64, AppError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO projects (name, type) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind(kind)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>("SELECT id, name, type FROM projects")
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    pub async fn update(&self, id: i64, name: &str, kind: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE projects SET name = ?, type = ? WHERE id = ?")
            .bind(name)
            .bind(kind)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
