//! Domain Layer
//!
//! Entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{account::Account, session::Session};
pub use repository::{AccountRepository, AuthStore, SessionRepository};
