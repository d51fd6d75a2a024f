//! In-memory repository implementation
//!
//! Same semantics as [`super::PgAuthRepository`] without a database: used
//! by the HTTP flow tests and by local runs without Postgres. Cloning
//! shares the underlying maps.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{account::Account, session::Session};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::domain::value_object::{AccountId, email::Email, remember_token::RememberToken};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    accounts: RwLock<HashMap<AccountId, Account>>,
    sessions: RwLock<HashMap<Uuid, Session>>,
    unavailable: AtomicBool,
}

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    inner: Arc<Inner>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every operation fails like an unreachable database.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn account_count(&self) -> usize {
        self.inner.accounts.read().await.len()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    fn check_available(&self) -> AuthResult<()> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Internal("storage unavailable".to_string()));
        }
        Ok(())
    }
}

impl AccountRepository for InMemoryAuthRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        self.check_available()?;
        let mut accounts = self.inner.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(AuthError::EmailTaken);
        }

        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        self.check_available()?;
        Ok(self.inner.accounts.read().await.get(account_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        self.check_available()?;
        let accounts = self.inner.accounts.read().await;
        Ok(accounts.values().find(|a| &a.email == email).cloned())
    }

    async fn find_by_remember_token(
        &self,
        token: &RememberToken,
    ) -> AuthResult<Option<Account>> {
        self.check_available()?;
        let accounts = self.inner.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.remember_token.as_ref() == Some(token))
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        self.check_available()?;
        let accounts = self.inner.accounts.read().await;
        Ok(accounts.values().any(|a| &a.email == email))
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        self.check_available()?;
        let mut accounts = self.inner.accounts.write().await;

        if let Some(stored) = accounts.get_mut(&account.account_id) {
            let remember_token = stored.remember_token.take();
            *stored = Account {
                remember_token,
                ..account.clone()
            };
        }
        Ok(())
    }

    async fn set_remember_token(
        &self,
        account_id: &AccountId,
        token: Option<&RememberToken>,
    ) -> AuthResult<()> {
        self.check_available()?;
        let mut accounts = self.inner.accounts.write().await;

        if let Some(stored) = accounts.get_mut(account_id) {
            stored.remember_token = token.cloned();
            stored.updated_at = Utc::now();
        }
        Ok(())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.check_available()?;
        self.inner
            .sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        self.check_available()?;
        let sessions = self.inner.sessions.read().await;
        Ok(sessions
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn touch(&self, session: &Session) -> AuthResult<()> {
        self.check_available()?;
        if let Some(stored) = self.inner.sessions.write().await.get_mut(&session.session_id) {
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.check_available()?;
        self.inner.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn delete_all_for_account(
        &self,
        account_id: &AccountId,
        except: Option<Uuid>,
    ) -> AuthResult<u64> {
        self.check_available()?;
        let mut sessions = self.inner.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, s| &s.account_id != account_id || Some(*id) == except);
        Ok((before - sessions.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.check_available()?;
        let mut sessions = self.inner.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        let deleted = (before - sessions.len()) as u64;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");
        Ok(deleted)
    }
}
