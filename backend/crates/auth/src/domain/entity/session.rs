//! Session Entity
//!
//! Server-side record of an authenticated request context, keyed by the
//! signed session cookie.

use chrono::{DateTime, Duration, Utc};
use platform::client::ClientInfo;
use uuid::Uuid;

use crate::domain::value_object::AccountId;

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: Uuid,
    pub account_id: AccountId,
    /// Established from a `Remember` cookie rather than a password
    pub via_remember: bool,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// TTL comes from config, not from here.
    pub fn new(account_id: AccountId, via_remember: bool, client: &ClientInfo, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            account_id,
            via_remember,
            expires_at_ms: (now + ttl).timestamp_millis(),
            client_ip: client.ip_string(),
            user_agent: client.user_agent.clone(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn remaining_ms(&self) -> i64 {
        (self.expires_at_ms - Utc::now().timestamp_millis()).max(0)
    }
}
