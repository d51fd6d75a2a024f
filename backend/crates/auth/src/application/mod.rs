//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod check_session;
pub mod config;
mod password_check;
pub mod remember;
pub mod restore_session;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use remember::{IssueRememberUseCase, IssuedRemember};
pub use restore_session::{RestoreSessionUseCase, RestoredSession};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
