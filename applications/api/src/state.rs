/// Request environment
use coinsextra_core::{QueryError, QueryHandle};
use std::sync::Arc;

/// Environment handed to every request
///
/// Holds the database binding, if one is configured. Cloning is cheap and
/// nothing in here is mutated after startup.
#[derive(Clone)]
pub struct Env {
    db: Option<Arc<dyn QueryHandle>>,
}

impl Env {
    /// Environment with no database binding
    pub fn unbound() -> Self {
        Self { db: None }
    }

    pub fn with_db(db: Arc<dyn QueryHandle>) -> Self {
        Self { db: Some(db) }
    }

    pub fn is_bound(&self) -> bool {
        self.db.is_some()
    }

    /// The bound database handle, or `QueryError::Unbound`
    pub fn db(&self) -> Result<&dyn QueryHandle, QueryError> {
        self.db.as_deref().ok_or(QueryError::Unbound)
    }
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("db_bound", &self.is_bound())
            .finish()
    }
}
