use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;

use crate::config::JwtConfig;
use crate::domain::login::errors::LoginError;
use crate::domain::login::models::Identity;
use crate::domain::login::ports::TokenIssuer;

/// HS256 access tokens built from an [`Identity`].
pub struct JwtTokenIssuer {
    handler: JwtHandler,
    ttl: Duration,
    issuer: Option<String>,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            ttl: Duration::hours(expiration_hours),
            issuer: None,
        }
    }

    /// Stamp `iss` on issued tokens and require it when decoding.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        self.handler = self.handler.with_issuer(&issuer);
        self.issuer = Some(issuer);
        self
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        let issuer = Self::new(config.secret.as_bytes(), config.expiration_hours);
        match &config.issuer {
            Some(iss) => issuer.with_issuer(iss.clone()),
            None => issuer,
        }
    }

    /// Decode and validate a token previously issued with the same settings.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        self.handler.decode(token)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, identity: &Identity) -> Result<String, LoginError> {
        let mut claims = Claims::new(
            identity.id(),
            identity.username(),
            identity.user_type().as_str(),
            self.ttl,
        );
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer.clone());
        }

        Ok(self.handler.encode(&claims)?)
    }
}
