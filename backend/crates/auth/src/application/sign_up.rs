//! Sign Up Use Case
//!
//! Registers an account; the password hash is computed here, once.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::password_check::hash_password;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    AccountId,
    account_password::RawPassword,
    display_name::DisplayName,
    email::Email,
};
use crate::error::{AuthError, AuthResult};

pub struct SignUpInput {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

pub struct SignUpOutput {
    pub account_id: AccountId,
}

pub struct SignUpUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email = Email::new(input.email)?;
        let display_name = DisplayName::new(&input.display_name)?;

        if self.account_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = hash_password(self.config.clone(), raw_password).await?;

        let account = Account::new(email, display_name, password_hash);
        self.account_repo.create(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account created");

        Ok(SignUpOutput {
            account_id: account.account_id,
        })
    }
}
