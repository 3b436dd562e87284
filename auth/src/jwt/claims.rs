use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// `sub` holds the stringified principal id; `username` and `user_type`
/// describe which kind of principal signed in. No secret material is ever
/// part of the claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Login name the principal is known by
    pub username: String,

    /// Principal kind, e.g. `usuario` or `cliente`
    pub user_type: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Build claims valid from now for `ttl`.
    pub fn new(
        subject: impl ToString,
        username: impl Into<String>,
        user_type: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self::issued_at(subject, username, user_type, ttl, Utc::now())
    }

    /// Build claims valid from `now` for `ttl`.
    pub fn issued_at(
        subject: impl ToString,
        username: impl Into<String>,
        user_type: impl Into<String>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        let issued = now.timestamp();

        Self {
            sub: subject.to_string(),
            username: username.into(),
            user_type: user_type.into(),
            iat: issued,
            nbf: issued,
            exp: (now + ttl).timestamp(),
            iss: None,
        }
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }
}
