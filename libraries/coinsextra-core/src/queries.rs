//! The fixed query templates issued by the API

use crate::query::Statement;

pub const SELECT_ACCOUNTS: &str = "SELECT * FROM accounts";

pub const SELECT_USERS: &str = "SELECT user_id, email, display_name, created_at FROM users";

pub const SELECT_ACCOUNTS_BY_USER: &str = "SELECT * FROM accounts WHERE user_id = ?";

/// Every account row
pub fn all_accounts() -> Statement {
    Statement::new(SELECT_ACCOUNTS)
}

/// Every user row, projected to its public columns
pub fn all_users() -> Statement {
    Statement::new(SELECT_USERS)
}

/// Accounts owned by `user_id`
pub fn accounts_for_user(user_id: impl Into<String>) -> Statement {
    Statement::new(SELECT_ACCOUNTS_BY_USER).bind(user_id)
}
