// src/db/query_repo.rs

use serde_json::{Map, Value};
use sqlx::{Column, Row, SqlitePool, TypeInfo, sqlite::SqliteRow};

use crate::common::error::AppError;

// Válvula de escape diagnóstica do chat (POST /api/query).
// Restrita a UMA instrução de leitura; qualquer outra coisa é recusada
// antes de chegar ao banco.
#[derive(Clone)]
pub struct QueryRepository {
    pool: SqlitePool,
}

impl QueryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_read_only(&self, sql: &str) -> Result<Vec<Value>, AppError> {
        let statement = Self::read_only_statement(sql)?;

        let rows = sqlx::query(statement).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(Self::row_to_json).collect())
    }

    /// Aceita somente uma instrução SELECT/WITH, sem instruções encadeadas.
    fn read_only_statement(sql: &str) -> Result<&str, AppError> {
        let statement = sql.trim().trim_end_matches(';').trim();

        if statement.contains(';') {
            return Err(AppError::QueryNotReadOnly);
        }

        let lowered = statement.to_lowercase();
        if !(lowered.starts_with("select") || lowered.starts_with("with")) {
            return Err(AppError::QueryNotReadOnly);
        }

        Ok(statement)
    }

    // Converte uma linha arbitrária em objeto JSON, coluna a coluna,
    // pela afinidade de tipo do SQLite.
    fn row_to_json(row: &SqliteRow) -> Value {
        let mut object = Map::new();

        for (index, column) in row.columns().iter().enumerate() {
            let value = match column.type_info().name() {
                "INTEGER" | "BOOLEAN" => row
                    .try_get::<Option<i64>, _>(index)
                    .ok()
                    .flatten()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "REAL" | "NUMERIC" => row
                    .try_get::<Option<f64>, _>(index)
                    .ok()
                    .flatten()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                _ => row
                    .try_get::<Option<String>, _>(index)
                    .ok()
                    .flatten()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            };

            object.insert(column.name().to_string(), value);
        }

        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_select_e_with() {
        assert!(QueryRepository::read_only_statement("SELECT * FROM employees").is_ok());
        assert!(QueryRepository::read_only_statement("  select 1;  ").is_ok());
        assert!(
            QueryRepository::read_only_statement("WITH t AS (SELECT 1) SELECT * FROM t").is_ok()
        );
    }

    #[test]
    fn recusa_mutacoes_e_instrucoes_encadeadas() {
        assert!(QueryRepository::read_only_statement("DELETE FROM efforts").is_err());
        assert!(QueryRepository::read_only_statement("UPDATE projects SET name = 'x'").is_err());
        assert!(QueryRepository::read_only_statement("DROP TABLE employees").is_err());
        assert!(QueryRepository::read_only_statement("SELECT 1; DELETE FROM efforts").is_err());
        assert!(QueryRepository::read_only_statement("").is_err());
    }
}
