//! CoinsExtra Storage
//!
//! `SQLite` implementation of the `QueryHandle` capability.
//!
//! The tables this crate reads (`accounts`, `users`) are owned by an external
//! process; nothing here creates, migrates or writes to them.
//!
//! # Example
//!
//! ```rust,no_run
//! use coinsextra_core::{queries, QueryHandle};
//! use coinsextra_storage::{create_pool, PoolSettings, SqliteQueryHandle};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://coinsextra.db", &PoolSettings::default()).await?;
//! let db = SqliteQueryHandle::new(pool);
//!
//! let accounts = db.all(&queries::all_accounts()).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod handle;
mod row;

pub use error::StorageError;
pub use handle::SqliteQueryHandle;

use sqlx::sqlite::SqlitePool;
use std::time::Duration;

/// Connection pool tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://coinsextra.db>`)
/// * `settings` - pool size and lock wait bound
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails
pub async fn create_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(settings.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(
        "Pool created ({} max connections)",
        settings.max_connections
    );

    Ok(pool)
}
