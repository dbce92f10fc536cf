//! CoinsExtra Core
//!
//! Storage-agnostic building blocks for the CoinsExtra read API.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Query capability**: the `QueryHandle` trait, the only contract the API
//!   has with its database binding
//! - **Statements**: `Statement`, a SQL template with positional parameters
//! - **Row sets**: `Row` and `RowSet`, ordered JSON projections of query results
//! - **Error Handling**: `QueryError` and its `Result` alias
//!
//! # Example
//!
//! ```rust
//! use coinsextra_core::queries;
//!
//! let statement = queries::accounts_for_user("42");
//! assert_eq!(statement.sql(), "SELECT * FROM accounts WHERE user_id = ?");
//! assert_eq!(statement.params(), ["42"]);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod queries;
pub mod query;

pub use error::{QueryError, Result};
pub use query::{QueryHandle, Row, RowSet, Statement};
