//! Account Entity
//!
//! The only record carrying authentication state: the password hash and
//! the optional remember token. Purchases and roles ride along as
//! references.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    AccountId, CourseId, account_password::AccountPassword, account_role::AccountRole,
    display_name::DisplayName, email::Email, remember_token::RememberToken,
};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Unique, normalized
    pub email: Email,
    pub display_name: DisplayName,
    pub password_hash: AccountPassword,
    /// At most one live token; a new issuance overwrites the previous one
    pub remember_token: Option<RememberToken>,
    /// Purchased courses, no duplicates
    pub purchases: Vec<CourseId>,
    /// Assigned roles, no duplicates
    pub roles: Vec<AccountRole>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// New account with the default role and no remember token
    pub fn new(email: Email, display_name: DisplayName, password_hash: AccountPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            email,
            display_name,
            password_hash,
            remember_token: None,
            purchases: Vec::new(),
            roles: vec![AccountRole::default()],
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn change_password(&mut self, password_hash: AccountPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn set_remember_token(&mut self, token: RememberToken) {
        self.remember_token = Some(token);
        self.updated_at = Utc::now();
    }

    pub fn clear_remember_token(&mut self) {
        self.remember_token = None;
        self.updated_at = Utc::now();
    }

    /// Returns `false` when the course was already purchased
    pub fn add_purchase(&mut self, course_id: CourseId) -> bool {
        if self.has_purchased(&course_id) {
            return false;
        }
        self.purchases.push(course_id);
        self.updated_at = Utc::now();
        true
    }

    pub fn has_purchased(&self, course_id: &CourseId) -> bool {
        self.purchases.contains(course_id)
    }

    /// Returns `false` when the role was already assigned
    pub fn assign_role(&mut self, role: AccountRole) -> bool {
        if self.has_role(role) {
            return false;
        }
        self.roles.push(role);
        self.updated_at = Utc::now();
        true
    }

    pub fn has_role(&self, role: AccountRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
