/// API route modules
pub mod accounts;
pub mod health;
pub mod users;

use crate::{
    error::{ApiError, Result},
    state::Env,
};
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use coinsextra_core::Statement;

/// Run `statement` against the bound database and render the rows
///
/// Any failure, including a missing binding, becomes `ApiError::Fetch`
/// tagged with `context`.
pub(crate) async fn fetch_rows(
    env: &Env,
    statement: Statement,
    context: &'static str,
) -> Result<Response> {
    let db = env.db().map_err(|e| ApiError::fetch(context, e))?;
    let rows = db
        .all(&statement)
        .await
        .map_err(|e| ApiError::fetch(context, e))?;

    // Row sets are pretty-printed with two-space indentation
    let body = serde_json::to_string_pretty(&rows).map_err(|e| ApiError::fetch(context, e))?;

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
