//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no marketplace vocabulary:
//! - Random tokens and HMAC-signed cookie values
//! - Password hashing (Argon2id with fixed parameters)
//! - Set-Cookie construction and Cookie header parsing
//! - Client identification from request headers

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
