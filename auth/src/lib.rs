//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Salted password hashing (Argon2id)
//! - Signed, time-bounded session tokens (HS256 JWT)
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hashed = hasher.hash("my_password", None).unwrap();
//! let is_valid = hasher.verify("my_password", &hashed.hash, &hashed.salt).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//! use chrono::Utc;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let (token, _claims) = handler.sign("alice@example.com", Utc::now()).unwrap();
//! let decoded = handler.verify(&token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("alice@example.com"));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashedPassword;
pub use password::PasswordError;
pub use password::PasswordHasher;
