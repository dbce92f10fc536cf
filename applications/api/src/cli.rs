//! One-shot query commands shared by the binary
use crate::{config::ApiConfig, state::Env};
use coinsextra_core::{queries, Statement};
use coinsextra_storage::SqliteQueryHandle;
use std::sync::Arc;

/// Bind the configured database, or leave the environment unbound
pub async fn open_env(config: &ApiConfig) -> anyhow::Result<Env> {
    let Some(url) = config.database.url.as_deref() else {
        tracing::warn!("No database URL configured (set COINSEXTRA_DATABASE__URL); data routes will fail");
        return Ok(Env::unbound());
    };

    let pool = coinsextra_storage::create_pool(url, &config.database.pool_settings()).await?;
    tracing::info!("Database connected");

    Ok(Env::with_db(Arc::new(SqliteQueryHandle::new(pool))))
}

/// Statement for the `accounts` command, optionally narrowed to one owner
pub fn accounts_statement(user: Option<String>) -> Statement {
    match user {
        Some(user_id) => queries::accounts_for_user(user_id),
        None => queries::all_accounts(),
    }
}

/// Run `statement` and render the rows as pretty JSON
pub async fn render_rows(env: &Env, statement: &Statement) -> anyhow::Result<String> {
    let rows = env.db()?.all(statement).await?;
    Ok(serde_json::to_string_pretty(&rows)?)
}
