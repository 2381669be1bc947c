// src/db/effort_repo.rs

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::allocation::Effort};

#[derive(Clone)]
pub struct EffortRepository {
    pool: SqlitePool,
}

impl EffortRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Upsert: inserir sob uma chave (funcionário, projeto, semana) já
    /// existente sobrescreve effort e days. É a política de merge, não erro.
    pub async fn upsert(
        &self,
        employee_id: i64,
        project_id: i64,
        week: i64,
        effort: f64,
        days: i64,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO efforts (employee_id, project_id, week, effort, days)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(employee_id, project_id, week)
            DO UPDATE SET effort = excluded.effort, days = excluded.days
            "#,
        )
        .bind(employee_id)
        .bind(project_id)
        .bind(week)
        .bind(effort)
        .bind(days)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Effort>, AppError> {
        let efforts = sqlx::query_as::<_, Effort>(
            "SELECT id, employee_id, project_id, week, effort, days FROM efforts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(efforts)
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM efforts").execute(&self.pool).await?;

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
        let result = sqlx::query("DELETE FROM efforts WHERE employee_id = ?")
            .bind(employee_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
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
        let result = sqlx::query("DELETE FROM efforts WHERE employee_id = ? AND project_id = ?")
            .bind(employee_id)
            .bind(project_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remoção por filtro (funcionários × semanas). As listas IN (...) são
    /// montadas com placeholders gerados programaticamente: nunca
    /// interpolamos valores na string SQL.
    pub async fn delete_by_filter(
        &self,
        employee_ids: &[i64],
        weeks: &[i64],
    ) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new("DELETE FROM efforts WHERE employee_id IN (");
        {
            let mut separated = qb.separated(", ");
            for id in employee_ids {
                separated.push_bind(*id);
            }
        }
        qb.push(") AND week IN (");
        {
            let mut separated = qb.separated(", ");
            for week in weeks {
                separated.push_bind(*week);
            }
        }
        qb.push(")");

        let result = qb.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
