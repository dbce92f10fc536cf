//! CoinsExtra API Library
//!
//! Read-only JSON endpoints over the accounts and users tables.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, handle};
pub use routes::Route;
pub use state::Env;
