// src/db/employee_repo.rs

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::org::{Employee, UpdateEmployeePayload},
};

// O repositório de funcionários, responsável por todas as interações
// com a tabela 'employees'.
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: Option<&str>,
        department: &str,
        employee_number: Option<&str>,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employees (name, email, department, employee_number)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(employee_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, department, employee_number
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Atualização parcial: o SET é montado programaticamente com
    /// placeholders, só com os campos presentes no payload.
    pub async fn update(&self, id: i64, fields: &UpdateEmployeePayload) -> Result<u64, AppError> {
        if fields.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE employees SET ");
        let mut any = false;

        if let Some(name) = &fields.name {
            qb.push("name = ").push_bind(name);
            any = true;
        }
        if let Some(email) = &fields.email {
            if any {
                qb.push(", ");
            }
            qb.push("email = ").push_bind(email);
            any = true;
        }
        if let Some(department) = &fields.department {
            if any {
                qb.push(", ");
            }
            qb.push("department = ").push_bind(department);
            any = true;
        }
        if let Some(number) = &fields.employee_number {
            if any {
                qb.push(", ");
            }
            qb.push("employee_number = ").push_bind(number);
        }

        qb.push(" WHERE id = ").push_bind(id);

        let result = qb.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::EmployeeNotFound);
        }

        Ok(result.rows_affected())
    }

    // Recebe um executor genérico para participar da transação de cascata
    // (esforços -> vínculos -> funcionário).
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
