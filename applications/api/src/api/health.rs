/// Health check API route
use crate::state::Env;
use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "coinsextra-api";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Whether a database handle is bound
    pub d1_bound: bool,
}

/// GET / - Health check endpoint, never touches the database
pub fn health(env: &Env) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        d1_bound: env.is_bound(),
    })
}
