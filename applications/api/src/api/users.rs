/// Users API routes
use crate::{api::fetch_rows, error::Result, state::Env};
use axum::response::Response;
use coinsextra_core::queries;

/// GET /users
pub async fn list_users(env: &Env) -> Result<Response> {
    fetch_rows(env, queries::all_users(), "Failed to fetch users").await
}
