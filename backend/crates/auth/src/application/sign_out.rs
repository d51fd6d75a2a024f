//! Sign Out Use Case
//!
//! Ends the current session and revokes the account's remember token, so
//! neither cookie can authenticate again.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::AccountId;
use crate::error::AuthResult;

pub struct SignOutUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
}

impl<A, S> SignOutUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>) -> Self {
        Self {
            account_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, account_id: &AccountId, session_id: Uuid) -> AuthResult<()> {
        self.session_repo.delete(session_id).await?;
        self.account_repo.set_remember_token(account_id, None).await?;

        tracing::info!(
            account_id = %account_id,
            session_id = %session_id,
            "Account signed out"
        );
        Ok(())
    }

    /// Sign out every other device; the current session survives.
    pub async fn execute_others(&self, account_id: &AccountId, session_id: Uuid) -> AuthResult<u64> {
        let deleted = self
            .session_repo
            .delete_all_for_account(account_id, Some(session_id))
            .await?;
        self.account_repo.set_remember_token(account_id, None).await?;

        tracing::info!(
            account_id = %account_id,
            deleted = deleted,
            "Account signed out from all other sessions"
        );
        Ok(deleted)
    }
}
