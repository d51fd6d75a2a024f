//! Auth Middleware
//!
//! `resolve_session` runs on every auth route except sign-up and sign-in
//! and decides who the request belongs to:
//! 1. a valid session cookie
//! 2. otherwise a valid `Remember` cookie, which opens a new session and
//!    adds its cookie to the response
//! 3. otherwise nobody
//!
//! Storage faults while resolving are logged and the request proceeds
//! anonymously. `require_account` then guards the protected routes.
//!
//! Sign-up and sign-in only get `attach_client`: a `Remember` cookie sent
//! along with credentials must not open a second session.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::{ClientInfo, extract_client_info};
use platform::cookie::extract_cookie;

use crate::application::{CheckSessionUseCase, RestoreSessionUseCase};
use crate::domain::entity::{account::Account, session::Session};
use crate::domain::repository::{AccountRepository, AuthStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::handlers::AuthAppState;

/// Authenticated account and the session carrying it
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account: Account,
    pub session: Session,
}

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or(AuthError::SessionInvalid)
    }
}

/// Like [`CurrentAccount`], but anonymous requests are fine
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<CurrentAccount>);

impl<S> FromRequestParts<S> for MaybeAccount
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAccount(parts.extensions.get::<CurrentAccount>().cloned()))
    }
}

pub async fn resolve_session<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AuthStore,
{
    let client = client_of(&req);

    let restored_cookie = match resolve(&state, req.headers(), &client).await {
        Ok(Some((current, cookie))) => {
            req.extensions_mut().insert(current);
            cookie
        }
        Ok(None) => None,
        Err(e) => {
            tracing::error!(error = %e, "Session resolution failed, continuing anonymously");
            None
        }
    };
    req.extensions_mut().insert(client);

    let mut response = next.run(req).await;

    // A handler that already set the session cookie (sign-out) wins.
    if let Some(cookie) = restored_cookie {
        if !sets_cookie(response.headers(), &state.config.session_cookie_name) {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
    }

    response
}

/// Client IP and user agent only; no session lookup.
pub async fn attach_client(mut req: Request<Body>, next: Next) -> Response {
    let client = client_of(&req);
    req.extensions_mut().insert(client);
    next.run(req).await
}

fn client_of(req: &Request<Body>) -> ClientInfo {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    extract_client_info(req.headers(), direct_ip)
}

async fn resolve<R>(
    state: &AuthAppState<R>,
    headers: &HeaderMap,
    client: &ClientInfo,
) -> AuthResult<Option<(CurrentAccount, Option<HeaderValue>)>>
where
    R: AuthStore,
{
    if let Some(token) = extract_cookie(headers, &state.config.session_cookie_name) {
        let check = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
        match check.get_session(&token).await {
            Ok(session) => {
                let account =
                    AccountRepository::find_by_id(state.repo.as_ref(), &session.account_id).await?;
                if let Some(account) = account {
                    return Ok(Some((CurrentAccount { account, session }, None)));
                }
                tracing::warn!(session_id = %session.session_id, "Session refers to a missing account");
            }
            Err(AuthError::SessionInvalid) => {}
            Err(e) => return Err(e),
        }
    }

    let Some(remember) = extract_cookie(headers, &state.config.remember_cookie_name) else {
        return Ok(None);
    };

    let restore = RestoreSessionUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );
    let Some(restored) = restore.execute(&remember, client).await? else {
        return Ok(None);
    };

    let cookie = state
        .config
        .session_cookie()
        .set_cookie_header(&restored.session_token);

    Ok(Some((
        CurrentAccount {
            account: restored.account,
            session: restored.session,
        },
        cookie,
    )))
}

fn sets_cookie(headers: &HeaderMap, name: &str) -> bool {
    let prefix = format!("{name}=");
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&prefix))
}

/// Rejects anonymous requests with `401` and `X-Auth-Required: true`.
///
/// Must run inside `resolve_session`.
pub async fn require_account(req: Request<Body>, next: Next) -> Response {
    if req.extensions().get::<CurrentAccount>().is_none() {
        return (StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response();
    }

    next.run(req).await
}
