//! Locale selected through the `Lang` cookie

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            _ => None,
        }
    }

    /// Cookie value to locale; unknown or missing values mean the default.
    pub fn from_cookie(value: Option<&str>) -> Self {
        value.and_then(Self::from_code).unwrap_or_default()
    }

    pub const fn is_rtl(&self) -> bool {
        matches!(self, Locale::Fa)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
