//! Application Configuration

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC key signing the session cookie
    pub session_secret: [u8; 32],
    /// Session lifetime (6 hours)
    pub session_ttl: Duration,
    /// Remember cookie name
    pub remember_cookie_name: String,
    /// HMAC key signing the remember cookie
    pub cookie_secret: [u8; 32],
    /// Remember cookie lifetime (30 days)
    pub remember_ttl: Duration,
    /// Locale cookie name
    pub lang_cookie_name: String,
    /// Locale cookie lifetime
    pub lang_ttl: Duration,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Application-wide secret appended to passwords before hashing
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "sid".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(6 * 3600),
            remember_cookie_name: "Remember".to_string(),
            cookie_secret: [0u8; 32],
            remember_ttl: Duration::from_secs(30 * 24 * 3600),
            lang_cookie_name: "Lang".to_string(),
            lang_ttl: Duration::from_secs(365 * 24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Random signing keys (for development and tests)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut session_secret = [0u8; 32];
        let mut cookie_secret = [0u8; 32];
        rand::rng().fill_bytes(&mut session_secret);
        rand::rng().fill_bytes(&mut cookie_secret);
        Self {
            session_secret,
            cookie_secret,
            ..Default::default()
        }
    }

    /// Random keys and non-Secure cookies (plain-HTTP localhost)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Remember cookie max-age in milliseconds (2 592 000 000 by default)
    pub fn remember_ttl_ms(&self) -> i64 {
        self.remember_ttl.as_millis() as i64
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig::new(&self.session_cookie_name)
            .secure(self.cookie_secure)
            .same_site(self.cookie_same_site)
            .max_age(self.session_ttl)
    }

    pub fn remember_cookie(&self) -> CookieConfig {
        CookieConfig::new(&self.remember_cookie_name)
            .secure(self.cookie_secure)
            .same_site(self.cookie_same_site)
            .max_age(self.remember_ttl)
    }

    /// Readable by page scripts, so not HttpOnly
    pub fn lang_cookie(&self) -> CookieConfig {
        CookieConfig::new(&self.lang_cookie_name)
            .http_only(false)
            .secure(self.cookie_secure)
            .same_site(self.cookie_same_site)
            .max_age(self.lang_ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl_ms(), 6 * 3600 * 1000);
        assert_eq!(config.remember_ttl_ms(), 2_592_000_000);
    }

    #[test]
    fn test_remember_cookie_is_http_only() {
        let cookie = AuthConfig::default()
            .remember_cookie()
            .build_set_cookie("tok.sig");
        assert_eq!(
            cookie,
            "Remember=tok.sig; Max-Age=2592000; Path=/; HttpOnly; Secure; SameSite=Lax"
        );
    }

    #[test]
    fn test_lang_cookie_is_script_readable() {
        let cookie = AuthConfig::development().lang_cookie().build_set_cookie("fa");
        assert_eq!(cookie, "Lang=fa; Max-Age=31536000; Path=/; SameSite=Lax");
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
        assert_ne!(a.session_secret, a.cookie_secret);
    }
}
