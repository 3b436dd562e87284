use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;
use super::PasswordScheme;

const DIGEST_HEX_LEN: usize = 64;

/// Salted SHA-256 digests rendered as lowercase hex.
///
/// Stored value is `hex(sha256(salt || password))`. With an empty salt this is
/// the plain digest of the password.
#[derive(Debug, Clone, Default)]
pub struct Sha256Scheme {
    salt: String,
}

impl Sha256Scheme {
    /// Create a scheme that prefixes every password with `salt` before hashing.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Compute the hex digest of the salted password.
    pub fn digest(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl PasswordScheme for Sha256Scheme {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(self.digest(password))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let stored = stored.trim();
        if stored.len() != DIGEST_HEX_LEN || !stored.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PasswordError::MalformedHash(format!(
                "expected {} hex characters",
                DIGEST_HEX_LEN
            )));
        }

        let expected = self.digest(password);
        let stored = stored.to_ascii_lowercase();

        // Compare every byte regardless of where the first mismatch is.
        let difference = expected
            .bytes()
            .zip(stored.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        Ok(difference == 0)
    }
}
