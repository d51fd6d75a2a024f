//! Value Object Module

pub mod account_password;
pub mod account_role;
pub mod display_name;
pub mod email;
pub mod locale;
pub mod remember_token;

pub use kernel::id::{AccountId, CourseId};
