//! Account Authentication Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Sign-up / sign-in with email + password
//! - Server-side sessions keyed by a signed cookie (6 hours)
//! - "Remember me": a signed `Remember` cookie (30 days) that restores a
//!   session once the session cookie is gone
//! - `Lang` cookie selecting `en` or `fa`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; a mismatch is never an error
//! - One remember token per account; issuing a new one revokes the old
//! - Sign-out and password change revoke the remember token
//! - Unknown or forged cookies make a request anonymous, never an error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
