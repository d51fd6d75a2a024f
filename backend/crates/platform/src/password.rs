//! Password Hashing and Verification
//!
//! Argon2id with fixed parameters, a random 16-byte salt per hash and an
//! optional application-wide pepper. Clear text is zeroized on drop.
//!
//! Two ways to hold a clear-text password:
//! - [`ClearTextPassword::new`] enforces the registration policy
//! - [`ClearTextPassword::for_verification`] accepts any non-empty input,
//!   so tightening the policy never locks out an existing account

use std::{fmt, sync::LazyLock};

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id memory cost in KiB (19 MiB)
pub const ARGON2_MEMORY_KIB: u32 = 19_456;
/// Argon2id iterations
pub const ARGON2_ITERATIONS: u32 = 2;
/// Argon2id lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Hashing failures. A wrong password is *not* one of these.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password
// ============================================================================

/// Clear text password, zeroized on drop. Not `Clone`; `Debug` is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate a new password (registration or password change).
    ///
    /// The policy looks at the NFKC form: not blank, 6..=128 code points,
    /// no control characters other than tab/newline, not a common pattern.
    /// The submitted string itself is what gets hashed, unchanged.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized = Zeroizing::new(raw.nfkc().collect::<String>());

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(&normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(Self(raw))
    }

    /// Wrap a submitted password for comparison against a stored hash.
    ///
    /// The bytes are kept as submitted; returns `None` for empty input.
    pub fn for_verification(raw: String) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut combined = Zeroizing::new(self.as_bytes().to_vec());
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        combined
    }

    /// Hash with Argon2id; returns the PHC string wrapper.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let hash = hasher()?
            .hash_password(&self.peppered(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

// ============================================================================
// Hashed Password
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, version, params, salt, hash)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// `true` when `password` (plus `pepper`) produced this hash.
    ///
    /// The parameters embedded in the PHC string are used, so hashes
    /// written under older parameters still verify.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }

    /// `true` when the stored hash was not produced with the current
    /// algorithm and parameters.
    pub fn needs_rehash(&self) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return true;
        };

        if parsed_hash.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }

        match Params::try_from(&parsed_hash) {
            Ok(params) => {
                params.m_cost() != ARGON2_MEMORY_KIB
                    || params.t_cost() != ARGON2_ITERATIONS
                    || params.p_cost() != ARGON2_PARALLELISM
            }
            Err(_) => true,
        }
    }
}

/// Hash of a fixed string under the current parameters, computed once
static DUMMY_HASH: LazyLock<Option<HashedPassword>> = LazyLock::new(|| {
    ClearTextPassword("timing-equalizer".to_string())
        .hash(None)
        .ok()
});

impl HashedPassword {
    /// Spend one full verification on a fixed hash.
    ///
    /// Lookups that found no stored hash call this so they cost the same
    /// as a real mismatch. Always `false`.
    pub fn verify_dummy(password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        if let Some(dummy) = DUMMY_HASH.as_ref() {
            let _ = dummy.verify(password, pepper);
        }
        false
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdef",
        "abc123",
        "letmein",
        "welcome",
        "admin123",
        "iloveyou",
        "sunshine",
        "monkey",
        "dragon",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Digit-only runs like `123456` or `987654` (wrapping 9→0 allowed)
fn is_sequential_numbers(s: &str) -> bool {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 4 {
        return false;
    }

    let ascending = digits.windows(2).all(|w| w[1] == (w[0] + 1) % 10);
    let descending = digits.windows(2).all(|w| w[0] == (w[1] + 1) % 10);

    ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unchecked(s: &str) -> ClearTextPassword {
        ClearTextPassword::for_verification(s.to_string()).unwrap()
    }

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("abc".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { min: 6, actual: 3 })));
    }

    #[test]
    fn test_password_too_long() {
        let result = ClearTextPassword::new("aB3".repeat(50));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_blank() {
        assert!(matches!(
            ClearTextPassword::new("".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defg".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_password_common_pattern() {
        for weak in ["password123", "qwerty12", "123456", "aaaaaaaa", "987654"] {
            assert!(
                matches!(
                    ClearTextPassword::new(weak.to_string()),
                    Err(PasswordPolicyError::CommonPattern)
                ),
                "{weak} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_passwords() {
        assert!(ClearTextPassword::new("Secret1".to_string()).is_ok());
        assert!(ClearTextPassword::new("رمز عبور امن".to_string()).is_ok());
    }

    #[test]
    fn test_for_verification_skips_policy() {
        assert!(ClearTextPassword::for_verification("wrong".to_string()).is_some());
        assert!(ClearTextPassword::for_verification(String::new()).is_none());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("Secret1".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&unchecked("Secret1"), None));
        assert!(!hashed.verify(&unchecked("wrong"), None));
        assert!(!hashed.verify(&unchecked("secret1"), None));
    }

    #[test]
    fn test_compatibility_forms_do_not_verify() {
        let hashed = ClearTextPassword::new("Secret1".to_string())
            .unwrap()
            .hash(None)
            .unwrap();

        // U+2460 and U+FF33 both fold to ASCII under NFKC
        assert!(!hashed.verify(&unchecked("Secret\u{2460}"), None));
        assert!(!hashed.verify(&unchecked("\u{FF33}ecret1"), None));
        assert!(hashed.verify(&unchecked("Secret1"), None));
    }

    #[test]
    fn test_dummy_verification_uses_current_parameters() {
        let dummy = DUMMY_HASH.as_ref().expect("dummy hash");
        assert!(!dummy.needs_rehash());
        assert!(!HashedPassword::verify_dummy(&unchecked("timing-equalizer"), Some(b"p".as_slice())));
        assert!(!HashedPassword::verify_dummy(&unchecked("anything"), None));
    }

    #[test]
    fn test_policy_uses_normalized_form() {
        // Fullwidth digits normalize to a sequential run
        assert!(matches!(
            ClearTextPassword::new("\u{FF11}\u{FF12}\u{FF13}\u{FF14}\u{FF15}\u{FF16}".to_string()),
            Err(PasswordPolicyError::CommonPattern)
        ));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = unchecked("Secret1");
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = unchecked("Secret1");
        let pepper = b"app_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"other")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = unchecked("Secret1");
        let hashed = password.hash(None).unwrap();
        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();

        assert!(restored.verify(&password, None));
        assert!(!restored.needs_rehash());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = unchecked("Secret1");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("Secret1"));
    }
}
