//! Change Password Use Case
//!
//! Re-verifies the current password before replacing the hash. A new
//! password also revokes the remember token and every other session.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::password_check::{check_password, hash_password};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{AccountId, account_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> ChangePasswordUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    /// Returns how many other sessions were ended.
    pub async fn execute(
        &self,
        account_id: &AccountId,
        current_session: Uuid,
        input: ChangePasswordInput,
    ) -> AuthResult<u64> {
        let mut account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        let current =
            RawPassword::submitted(input.current_password).ok_or(AuthError::InvalidCredentials)?;
        let check = check_password(
            self.config.clone(),
            Some(account.password_hash.clone()),
            current,
        )
        .await?;
        if !check.matches {
            return Err(AuthError::InvalidCredentials);
        }

        let new_password = RawPassword::new(input.new_password)?;
        let password_hash = hash_password(self.config.clone(), new_password).await?;

        account.change_password(password_hash);
        account.clear_remember_token();
        self.account_repo.update(&account).await?;
        self.account_repo.set_remember_token(account_id, None).await?;

        let ended = self
            .session_repo
            .delete_all_for_account(account_id, Some(current_session))
            .await?;

        tracing::info!(
            account_id = %account_id,
            ended_sessions = ended,
            "Password changed"
        );

        Ok(ended)
    }
}
