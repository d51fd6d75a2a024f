use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to an account. An account may hold several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum AccountRole {
    #[default]
    Student = 0,
    Instructor = 1,
    Admin = 2,
}

impl AccountRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountRole::Student => "student",
            AccountRole::Instructor => "instructor",
            AccountRole::Admin => "admin",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(AccountRole::Student),
            1 => Some(AccountRole::Instructor),
            2 => Some(AccountRole::Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "student" => Some(AccountRole::Student),
            "instructor" => Some(AccountRole::Instructor),
            "admin" => Some(AccountRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_role_ids() {
        for role in [AccountRole::Student, AccountRole::Instructor, AccountRole::Admin] {
            assert_eq!(AccountRole::from_id(role.id()), Some(role));
            assert_eq!(AccountRole::from_code(role.code()), Some(role));
        }
        assert_eq!(AccountRole::from_id(9), None);
        assert_eq!(AccountRole::from_code("super_admin"), None);
    }

    #[test]
    fn test_account_role_serde() {
        let json = serde_json::to_string(&AccountRole::Instructor).unwrap();
        assert_eq!(json, "\"instructor\"");
    }
}
