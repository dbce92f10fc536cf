//! Query capability exposed by the database binding

use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One result record: column name to value, in projection order
pub type Row = Map<String, Value>;

/// Ordered collection of records returned by a query
pub type RowSet = Vec<Row>;

/// A SQL template with positional (`?`) parameters bound in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<String>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Bind the next positional parameter
    #[must_use]
    pub fn bind(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Database handle capable of running parameterized read queries
///
/// Implemented by the `SQLite` storage crate for production and by fakes in
/// tests. Implementations must not retry or cache; one call is one query.
#[async_trait]
pub trait QueryHandle: Send + Sync {
    /// Execute `statement` and fetch every resulting row
    async fn all(&self, statement: &Statement) -> Result<RowSet>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryError;
    use serde_json::json;

    struct FixedRows(RowSet);

    #[async_trait]
    impl QueryHandle for FixedRows {
        async fn all(&self, _statement: &Statement) -> Result<RowSet> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl QueryHandle for Broken {
        async fn all(&self, _statement: &Statement) -> Result<RowSet> {
            Err(QueryError::database("disk I/O error"))
        }
    }

    #[test]
    fn bind_appends_params_in_order() {
        let statement = Statement::new("SELECT ? , ?").bind("a").bind(String::from("b"));
        assert_eq!(statement.sql(), "SELECT ? , ?");
        assert_eq!(statement.params(), ["a", "b"]);
    }

    #[tokio::test]
    async fn handle_is_object_safe() {
        let mut row = Row::new();
        row.insert("user_id".to_string(), json!("42"));
        let handles: Vec<Box<dyn QueryHandle>> =
            vec![Box::new(FixedRows(vec![row.clone()])), Box::new(Broken)];

        let statement = Statement::new("SELECT 1");
        assert_eq!(handles[0].all(&statement).await.unwrap(), vec![row]);
        assert!(handles[1].all(&statement).await.is_err());
    }
}
