//! Request dispatch
use crate::{api, error::ApiError, routes::Route, state::Env};
use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the HTTP application
///
/// Every request goes through [`handle`]; axum only supplies the transport,
/// tracing and the shared environment.
pub fn create_router(env: Env) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(env)
}

async fn dispatch(State(env): State<Env>, method: Method, uri: Uri) -> Response {
    handle(&env, &method, uri.path()).await
}

/// Produce the response for one request
///
/// Never fails: unmatched routes become 404 and data route failures 500.
pub async fn handle(env: &Env, method: &Method, path: &str) -> Response {
    let Some(route) = Route::resolve(method, path) else {
        tracing::debug!(%method, path, "No route matched");
        return ApiError::NotFound.into_response();
    };

    tracing::debug!(?route, "Dispatching");

    let result = match route {
        Route::Health => Ok(api::health::health(env).into_response()),
        Route::Accounts => api::accounts::list_accounts(env).await,
        Route::Users => api::users::list_users(env).await,
        Route::UserAccounts { user_id } => api::accounts::list_user_accounts(env, &user_id).await,
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn handle_without_binding() {
        let env = Env::unbound();

        let response = handle(&env, &Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = handle(&env, &Method::GET, "/users").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle(&env, &Method::GET, "/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
