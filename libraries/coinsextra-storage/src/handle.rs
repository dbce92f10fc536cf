use crate::{row, StorageError};
use async_trait::async_trait;
use coinsextra_core::{QueryHandle, Result, RowSet, Statement};
use sqlx::SqlitePool;

/// Query handle backed by a `SQLite` pool
#[derive(Debug, Clone)]
pub struct SqliteQueryHandle {
    pool: SqlitePool,
}

impl SqliteQueryHandle {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_all(&self, statement: &Statement) -> std::result::Result<RowSet, StorageError> {
        let mut query = sqlx::query(statement.sql());
        for param in statement.params() {
            query = query.bind(param.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row::to_json).collect()
    }
}

#[async_trait]
impl QueryHandle for SqliteQueryHandle {
    async fn all(&self, statement: &Statement) -> Result<RowSet> {
        tracing::debug!(
            sql = statement.sql(),
            params = statement.params().len(),
            "Executing query"
        );

        let rows = self.fetch_all(statement).await?;

        tracing::debug!(rows = rows.len(), "Query complete");
        Ok(rows)
    }
}
