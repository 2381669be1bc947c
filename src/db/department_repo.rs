// src/db/department_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::org::Department};

#[derive(Clone)]
pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<i64, AppError> {
        let result: Result<(i64,), sqlx::Error> =
            sqlx::query_as("INSERT INTO departments (name) VALUES (?) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool)
                .await;

        let (id,) = result.map_err(|e| Self::map_unique_violation(e, name))?;

        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        let departments =
            sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(departments)
    }

    pub async fn rename(&self, id: i64, name: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE departments SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_unique_violation(e, name))?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Tratamento de erro de chave duplicada: vira mensagem de domínio,
    // nunca um 500 genérico.
    fn map_unique_violation(e: sqlx::Error, name: &str) -> AppError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return AppError::UniqueConstraintViolation(format!(
                    "Já existe um departamento chamado '{}'.",
                    name
                ));
            }
        }
        e.into()
    }
}
