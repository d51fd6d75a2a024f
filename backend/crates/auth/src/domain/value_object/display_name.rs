//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

pub const DISPLAY_NAME_MAX_LENGTH: usize = 64;

/// Name shown on course pages and receipts. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// NFC-normalize, trim, and require 1..=64 characters without
    /// control characters.
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = name.as_ref().nfc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Display name cannot be empty"));
        }

        let len = trimmed.chars().count();
        if len > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Display name must be at most {} characters (got {})",
                DISPLAY_NAME_MAX_LENGTH, len
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "Display name contains invalid characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
