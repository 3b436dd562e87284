use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::PasswordScheme;

/// Argon2id hashes in PHC string format.
///
/// Used for application (internal) user accounts. The PHC string embeds the
/// algorithm, parameters and salt, so verification needs no extra state.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Scheme;

impl Argon2Scheme {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordScheme for Argon2Scheme {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(stored).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}
