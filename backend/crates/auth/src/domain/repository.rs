//! Repository Traits
//!
//! Persistence interfaces; implementations live in `infra`.

use uuid::Uuid;

use crate::domain::entity::{account::Account, session::Session};
use crate::domain::value_object::{AccountId, email::Email, remember_token::RememberToken};
use crate::error::AuthResult;

#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account. A taken email is `AuthError::EmailTaken`.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Exact match on the normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Exact match on the stored remember token
    async fn find_by_remember_token(&self, token: &RememberToken)
    -> AuthResult<Option<Account>>;

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Write profile, credential, relation and login fields.
    ///
    /// Leaves `remember_token` untouched; that column is only written by
    /// [`LocalAccountRepository::set_remember_token`].
    async fn update(&self, account: &Account) -> AuthResult<()>;

    /// Overwrite (or clear) the remember token. Last write wins.
    async fn set_remember_token(
        &self,
        account_id: &AccountId,
        token: Option<&RememberToken>,
    ) -> AuthResult<()>;
}

#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Unexpired session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Persist `last_activity_at`
    async fn touch(&self, session: &Session) -> AuthResult<()>;

    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete every session of the account except `except`
    async fn delete_all_for_account(
        &self,
        account_id: &AccountId,
        except: Option<Uuid>,
    ) -> AuthResult<u64>;

    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

/// One backing store serving both repositories, as the HTTP layer needs.
pub trait AuthStore:
    AccountRepository + SessionRepository + Clone + Send + Sync + 'static
{
}

impl<T> AuthStore for T where
    T: AccountRepository + SessionRepository + Clone + Send + Sync + 'static
{
}
