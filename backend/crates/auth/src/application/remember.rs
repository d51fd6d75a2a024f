//! Remember-Token Issuance
//!
//! Generates a fresh token, stores it on the account (replacing any
//! earlier one, so other devices lose their remember login) and hands back
//! the signed cookie value. The write runs detached from the request.

use std::sync::Arc;

use platform::crypto::sign_value;
use tokio::task::JoinHandle;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::remember_token::RememberToken;

pub struct IssuedRemember {
    pub token: RememberToken,
    /// Signed value for the `Remember` cookie
    pub cookie_value: String,
    /// Background write of the token. Callers normally drop this.
    pub persisted: JoinHandle<()>,
}

pub struct IssueRememberUseCase<A>
where
    A: AccountRepository + Send + Sync + 'static,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> IssueRememberUseCase<A>
where
    A: AccountRepository + Send + Sync + 'static,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Must be called inside a Tokio runtime. A failed write is logged
    /// and otherwise ignored; the cookie is issued regardless.
    pub fn execute(&self, account: &mut Account) -> IssuedRemember {
        let token = RememberToken::generate();
        account.set_remember_token(token.clone());

        let cookie_value = sign_value(&self.config.cookie_secret, token.as_str());

        let repo = self.account_repo.clone();
        let account_id = account.account_id;
        let stored = token.clone();
        let persisted = tokio::spawn(async move {
            match repo.set_remember_token(&account_id, Some(&stored)).await {
                Ok(()) => tracing::debug!(account_id = %account_id, "Remember token stored"),
                Err(e) => tracing::error!(
                    account_id = %account_id,
                    error = %e,
                    "Failed to store remember token"
                ),
            }
        });

        IssuedRemember {
            token,
            cookie_value,
            persisted,
        }
    }
}
