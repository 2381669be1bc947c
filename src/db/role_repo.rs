// src/db/role_repo.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    models::auth::{Role, UserRole},
};

// Repositório da tabela user_roles: a âncora de autorização do sistema.
#[derive(Clone)]
pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve o papel de um e-mail verificado. `Ok(None)` significa
    /// "sem acesso"; um erro de banco é um sinal distinto e não pode ser
    /// confundido com "não encontrado".
    pub async fn find_role_by_email(&self, email: &str) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_scalar::<_, Role>("SELECT role FROM user_roles WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    pub async fn list(&self) -> Result<Vec<UserRole>, AppError> {
        let users = sqlx::query_as::<_, UserRole>(
            r#"
            SELECT id, email, role, created_at, updated_at
            FROM user_roles
            ORDER BY email
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Insere ou, se o e-mail já existir, troca o papel e avança updated_at.
    pub async fn upsert(&self, email: &str, role: Role) -> Result<UserRole, AppError> {
        let user = sqlx::query_as::<_, UserRole>(
            r#"
            INSERT INTO user_roles (email, role)
            VALUES (?, ?)
            ON CONFLICT(email)
            DO UPDATE SET role = excluded.role, updated_at = CURRENT_TIMESTAMP
            RETURNING id, email, role, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update(&self, email: &str, role: Role) -> Result<Option<UserRole>, AppError> {
        let user = sqlx::query_as::<_, UserRole>(
            r#"
            UPDATE user_roles
            SET role = ?, updated_at = CURRENT_TIMESTAMP
            WHERE email = ?
            RETURNING id, email, role, created_at, updated_at
            "#,
        )
        .bind(role)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, email: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM user_roles WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
