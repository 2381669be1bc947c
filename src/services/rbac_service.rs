// src/services/rbac_service.rs

use crate::{
    common::error::AppError,
    db::RoleRepository,
    models::auth::{Role, UserRole},
};

// Gestão dos papéis de usuário (área admin). O valor do papel é validado
// contra o enum antes de tocar no banco.
#[derive(Clone)]
pub struct RbacService {
    repo: RoleRepository,
}

impl RbacService {
    pub fn new(repo: RoleRepository) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> Result<Vec<UserRole>, AppError> {
        self.repo.list().await
    }

    pub async fn upsert_user(&self, email: &str, role: &str) -> Result<UserRole, AppError> {
        let role = Role::parse(role).ok_or(AppError::InvalidRole)?;
        self.repo.upsert(email, role).await
    }

    pub async fn update_user(&self, email: &str, role: &str) -> Result<UserRole, AppError> {
        let role = Role::parse(role).ok_or(AppError::InvalidRole)?;
        self.repo
            .update(email, role)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn delete_user(&self, email: &str) -> Result<u64, AppError> {
        let deleted = self.repo.delete(email).await?;
        if deleted == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(deleted)
    }
}
