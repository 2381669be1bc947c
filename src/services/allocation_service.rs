// src/services/allocation_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{AssignmentRepository, EffortRepository},
    models::allocation::{Effort, ProjectAssignment},
};

// Operações sobre esforços semanais e vínculos funcionário × projeto.
#[derive(Clone)]
pub struct AllocationService {
    effort_repo: EffortRepository,
    assignment_repo: AssignmentRepository,
    pool: SqlitePool,
}

impl AllocationService {
    pub fn new(
        effort_repo: EffortRepository,
        assignment_repo: AssignmentRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            effort_repo,
            assignment_repo,
            pool,
        }
    }

    // --- ESFORÇOS ---

    pub async fn upsert_effort(
        &self,
        employee_id: i64,
        project_id: i64,
        week: i64,
        effort: f64,
        days: i64,
    ) -> Result<(), AppError> {
        self.effort_repo
            .upsert(employee_id, project_id, week, effort, days)
            .await
    }

    pub async fn list_efforts(&self) -> Result<Vec<Effort>, AppError> {
        self.effort_repo.list().await
    }

    pub async fn clear_all_efforts(&self) -> Result<u64, AppError> {
        self.effort_repo.delete_all().await
    }

    pub async fn clear_view(&self, employee_ids: &[i64], weeks: &[i64]) -> Result<u64, AppError> {
        self.effort_repo.delete_by_filter(employee_ids, weeks).await
    }

    // --- VÍNCULOS ---

    pub async fn create_assignment(
        &self,
        employee_id: i64,
        project_id: i64,
    ) -> Result<(), AppError> {
        self.assignment_repo.create(employee_id, project_id).await
    }

    pub async fn list_assignments(&self) -> Result<Vec<ProjectAssignment>, AppError> {
        self.assignment_repo.list().await
    }

    /// Remove o vínculo e os esforços exatos daquele par, numa transação:
    /// ou os dois passos, ou nenhum.
    pub async fn delete_assignment(
        &self,
        employee_id: i64,
        project_id: i64,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.effort_repo
            .delete_by_pair(&mut *tx, employee_id, project_id)
            .await?;
        self.assignment_repo
            .delete_by_pair(&mut *tx, employee_id, project_id)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
