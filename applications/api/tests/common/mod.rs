#![allow(dead_code)]

/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use coinsextra_core::{QueryError, QueryHandle, Row, RowSet, Statement};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// In-memory handle that records every statement it receives
///
/// Parameterized statements filter the fixture rows on `user_id`, which is
/// the only parameterized query the API issues.
#[derive(Default)]
pub struct RecordingHandle {
    rows: RowSet,
    statements: Mutex<Vec<Statement>>,
}

impl RecordingHandle {
    pub fn new(rows: RowSet) -> Arc<Self> {
        Arc::new(Self {
            rows,
            statements: Mutex::new(Vec::new()),
        })
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryHandle for RecordingHandle {
    async fn all(&self, statement: &Statement) -> Result<RowSet, QueryError> {
        self.statements.lock().unwrap().push(statement.clone());

        let rows = match statement.params().first() {
            Some(user_id) => self
                .rows
                .iter()
                .filter(|row| row.get("user_id") == Some(&Value::String(user_id.clone())))
                .cloned()
                .collect(),
            None => self.rows.clone(),
        };
        Ok(rows)
    }
}

/// Handle whose every query fails
pub struct FailingHandle;

#[async_trait]
impl QueryHandle for FailingHandle {
    async fn all(&self, _statement: &Statement) -> Result<RowSet, QueryError> {
        Err(QueryError::database("no such table: accounts"))
    }
}

/// Test fixture: an account row
pub fn account(account_id: &str, user_id: &str) -> Row {
    let Value::Object(row) = json!({
        "account_id": account_id,
        "user_id": user_id,
        "currency": "BTC",
        "balance": 0.5,
    }) else {
        unreachable!()
    };
    row
}

/// Send one request through the router
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    send(app, Method::GET, uri).await
}
