//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{attach_client, require_account, resolve_session};

/// Auth routes over any backing store; nest under `/api/auth`.
pub fn auth_router<R>(repo: R, config: AuthConfig) -> Router
where
    R: AuthStore,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route("/password", post(handlers::change_password::<R>))
        .route("/signout/others", post(handlers::sign_out_others::<R>))
        .route_layer(middleware::from_fn(require_account));

    // Credentials in, new session out; never restored from Remember
    let credentials = Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route_layer(middleware::from_fn(attach_client));

    let session_aware = Router::new()
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .route("/lang", post(handlers::set_lang::<R>))
        .merge(protected)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_session::<R>,
        ));

    Router::new()
        .merge(credentials)
        .merge(session_aware)
        .with_state(state)
}
