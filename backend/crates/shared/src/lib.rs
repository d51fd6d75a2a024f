//! Shared Kernel
//!
//! Vocabulary shared by every crate in the marketplace backend:
//! - [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed identifiers ([`id::Id`])
//!
//! Anything placed here must mean the same thing in every domain.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
