//! Route table
//!
//! | Method | Path                        | Route          |
//! |--------|-----------------------------|----------------|
//! | GET    | `/`                         | `Health`       |
//! | GET    | `/accounts`                 | `Accounts`     |
//! | GET    | `/users`                    | `Users`        |
//! | GET    | `/users/{user_id}/accounts` | `UserAccounts` |
//!
//! Matching is case-sensitive and exact; anything else has no route.

use axum::http::Method;
use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    Accounts,
    Users,
    UserAccounts { user_id: String },
}

impl Route {
    /// Resolve a request line to a route, first match wins
    ///
    /// `path` is the raw (still percent-encoded) URI path without the query.
    pub fn resolve(method: &Method, path: &str) -> Option<Self> {
        if *method != Method::GET {
            return None;
        }

        match path {
            "/" => Some(Self::Health),
            "/accounts" => Some(Self::Accounts),
            "/users" => Some(Self::Users),
            _ => user_accounts_capture(path).map(|user_id| Self::UserAccounts { user_id }),
        }
    }
}

/// Capture `{user_id}` from `/users/{user_id}/accounts`
///
/// The capture is one non-empty segment. It is percent-decoded, and a segment
/// that decodes to something containing `/` (or to invalid UTF-8) is rejected.
fn user_accounts_capture(path: &str) -> Option<String> {
    let segment = path.strip_prefix("/users/")?.strip_suffix("/accounts")?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }

    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    if decoded.contains('/') {
        return None;
    }

    Some(decoded.into_owned())
}
