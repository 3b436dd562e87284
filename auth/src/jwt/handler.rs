use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// HS256 token handler.
///
/// Generic over the claims type. Decoding always checks the signature, `exp`
/// and `nbf`; the issuer is checked only when one was configured.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret, at least 32 bytes recommended
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "nbf"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Only accept tokens whose `iss` claim equals `issuer`. Tokens without
    /// an `iss` claim are refused as well.
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self.validation.set_required_spec_claims(&["exp", "nbf", "iss"]);
        self
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with a different secret
    /// * `TokenExpired` - `exp` is in the past
    /// * `NotYetValid` - `nbf` is in the future
    /// * `InvalidIssuer` - `iss` is missing or does not match the configured issuer
    /// * `Malformed` - Anything else (bad encoding, missing claims)
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::ImmatureSignature => JwtError::NotYetValid,
                ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
                ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => {
                    JwtError::InvalidIssuer
                }
                _ => JwtError::Malformed(e.to_string()),
            })
    }
}
