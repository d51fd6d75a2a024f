//! HTTP Handlers

use axum::extract::{Extension, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::Json;
use std::sync::Arc;

use platform::client::ClientInfo;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    SignUpInput, SignUpUseCase,
};
use crate::domain::repository::AuthStore;
use crate::domain::value_object::locale::Locale;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountResponse, ChangePasswordRequest, SessionStatusResponse, SetLangRequest, SignInRequest,
    SignInResponse, SignOutOthersResponse, SignUpRequest, SignUpResponse,
};
use crate::presentation::middleware::{CurrentAccount, MaybeAccount};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AuthStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

fn cookie_header(value: Option<HeaderValue>) -> AuthResult<HeaderValue> {
    value.ok_or_else(|| AuthError::Internal("Cookie is not a valid header value".to_string()))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: AuthStore,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        display_name: req.display_name,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            account_id: output.account_id,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Extension(client): Extension<ClientInfo>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<(HeaderMap, Json<SignInResponse>)>
where
    R: AuthStore,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
        remember_me: req.remember_me,
    };

    let output = use_case.execute(input, &client).await?;

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.session_cookie().set_cookie_header(&output.session_token))?,
    );

    // The token write finishes in the background; the cookie goes out now.
    if let Some(remember) = output.remember {
        headers.append(
            header::SET_COOKIE,
            cookie_header(
                state
                    .config
                    .remember_cookie()
                    .set_cookie_header(&remember.cookie_value),
            )?,
        );
    }

    Ok((
        headers,
        Json(SignInResponse {
            account_id: output.account.account_id,
            display_name: output.account.display_name.as_str().to_string(),
            roles: output.account.roles.clone(),
            expires_at_ms: output.session.expires_at_ms,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    MaybeAccount(current): MaybeAccount,
) -> AuthResult<(StatusCode, HeaderMap)>
where
    R: AuthStore,
{
    if let Some(current) = current {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.repo.clone());
        // Cookies are cleared either way
        if let Err(e) = use_case
            .execute(&current.account.account_id, current.session.session_id)
            .await
        {
            tracing::warn!(error = %e, "Sign-out cleanup failed");
        }
    }

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.session_cookie().delete_cookie_header())?,
    );
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.remember_cookie().delete_cookie_header())?,
    );

    Ok((StatusCode::NO_CONTENT, headers))
}

/// POST /api/auth/signout/others
///
/// Ends every other session and revokes the remember token; this device
/// stays signed in.
pub async fn sign_out_others<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentAccount,
) -> AuthResult<(HeaderMap, Json<SignOutOthersResponse>)>
where
    R: AuthStore,
{
    let use_case = SignOutUseCase::new(state.repo.clone(), state.repo.clone());
    let ended_sessions = use_case
        .execute_others(&current.account.account_id, current.session.session_id)
        .await?;

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.remember_cookie().delete_cookie_header())?,
    );

    Ok((headers, Json(SignOutOthersResponse { ended_sessions })))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    MaybeAccount(current): MaybeAccount,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: AuthStore,
{
    let lang_cookie = extract_cookie(&headers, &state.config.lang_cookie_name);
    let locale = Locale::from_cookie(lang_cookie.as_deref());

    let response = match current {
        Some(CurrentAccount { account, session }) => SessionStatusResponse {
            authenticated: true,
            account_id: Some(account.account_id),
            display_name: Some(account.display_name.as_str().to_string()),
            roles: Some(account.roles),
            expires_at_ms: Some(session.expires_at_ms),
            lang: locale.code(),
            rtl: locale.is_rtl(),
        },
        None => SessionStatusResponse {
            authenticated: false,
            account_id: None,
            display_name: None,
            roles: None,
            expires_at_ms: None,
            lang: locale.code(),
            rtl: locale.is_rtl(),
        },
    };

    Json(response)
}

// ============================================================================
// Profile (requires authentication)
// ============================================================================

/// GET /api/auth/me
pub async fn me(current: CurrentAccount) -> Json<AccountResponse> {
    Json(AccountResponse::from(&current.account))
}

// ============================================================================
// Change Password (requires authentication)
// ============================================================================

/// POST /api/auth/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentAccount,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<(StatusCode, HeaderMap)>
where
    R: AuthStore,
{
    let use_case =
        ChangePasswordUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = ChangePasswordInput {
        current_password: req.current_password,
        new_password: req.new_password,
    };

    use_case
        .execute(&current.account.account_id, current.session.session_id, input)
        .await?;

    // The stored token is gone; drop the cookie too
    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.remember_cookie().delete_cookie_header())?,
    );

    Ok((StatusCode::NO_CONTENT, headers))
}

// ============================================================================
// Locale
// ============================================================================

/// POST /api/auth/lang
pub async fn set_lang<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SetLangRequest>,
) -> AuthResult<(StatusCode, HeaderMap)>
where
    R: AuthStore,
{
    let locale = Locale::from_code(&req.lang).ok_or_else(|| AuthError::Validation {
        message: format!("Unsupported language: {}", req.lang),
        action: Some("Use \"en\" or \"fa\"".to_string()),
    })?;

    let mut headers = HeaderMap::new();
    headers.append(
        header::SET_COOKIE,
        cookie_header(state.config.lang_cookie().set_cookie_header(locale.code()))?,
    );

    Ok((StatusCode::NO_CONTENT, headers))
}
