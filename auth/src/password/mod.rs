pub mod argon2id;
pub mod errors;
pub mod sha256;

pub use argon2id::Argon2Scheme;
pub use errors::PasswordError;
pub use sha256::Sha256Scheme;

/// A stored-password format.
///
/// Implementations produce the string persisted next to an account and
/// check a plaintext candidate against such a string.
pub trait PasswordScheme: Send + Sync {
    /// Hash a plaintext password into its stored representation.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored representation.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - Stored value is not in this scheme's format
    /// * `VerificationFailed` - Verification could not be carried out
    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError>;
}
