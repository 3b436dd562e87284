//! Authentication primitives for the login service
//!
//! - Password schemes: Argon2id for application users, salted SHA-256 hex
//!   digests for client records
//! - Access token claims and HS256 encoding/decoding
//!
//! The service adapts these behind its own ports; nothing here knows about
//! HTTP or databases.
//!
//! # Examples
//!
//! ## Password Schemes
//! ```
//! use auth::{Argon2Scheme, PasswordScheme, Sha256Scheme};
//!
//! let argon2 = Argon2Scheme::new();
//! let hash = argon2.hash("my_password").unwrap();
//! assert!(argon2.verify("my_password", &hash).unwrap());
//!
//! let sha256 = Sha256Scheme::default();
//! let digest = sha256.digest("secret");
//! assert!(sha256.verify("secret", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new(42, "cli@x.com", "cliente", Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//!
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "42");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::Argon2Scheme;
pub use password::PasswordError;
pub use password::PasswordScheme;
pub use password::Sha256Scheme;
