/// Accounts API routes
use crate::{api::fetch_rows, error::Result, state::Env};
use axum::response::Response;
use coinsextra_core::queries;

/// GET /accounts
pub async fn list_accounts(env: &Env) -> Result<Response> {
    fetch_rows(env, queries::all_accounts(), "Failed to fetch accounts").await
}

/// GET /users/{user_id}/accounts
///
/// An unknown user is not an error: the query yields no rows and the
/// response is an empty array.
pub async fn list_user_accounts(env: &Env, user_id: &str) -> Result<Response> {
    fetch_rows(
        env,
        queries::accounts_for_user(user_id),
        "Failed to fetch user accounts",
    )
    .await
}
