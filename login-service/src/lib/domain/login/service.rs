use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::domain::login::errors::LoginError;
use crate::domain::login::models::ClientIdentity;
use crate::domain::login::models::ClientRecord;
use crate::domain::login::models::Credentials;
use crate::domain::login::models::Identity;
use crate::domain::login::models::LoginOutcome;
use crate::domain::login::ports::ClientProvider;
use crate::domain::login::ports::LoginServicePort;
use crate::domain::login::ports::TokenIssuer;
use crate::domain::login::ports::UserProvider;

/// Login dispatcher.
///
/// Tries the application user store first and the client store second; the
/// first match wins and identities are never merged.
pub struct LoginService<UP, CP, TI>
where
    UP: UserProvider,
    CP: ClientProvider,
    TI: TokenIssuer,
{
    user_provider: Arc<UP>,
    client_provider: Arc<CP>,
    token_issuer: Arc<TI>,
}

impl<UP, CP, TI> LoginService<UP, CP, TI>
where
    UP: UserProvider,
    CP: ClientProvider,
    TI: TokenIssuer,
{
    /// Create a new login service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_provider` - Application user store
    /// * `client_provider` - Client record store
    /// * `token_issuer` - Token minting implementation
    pub fn new(user_provider: Arc<UP>, client_provider: Arc<CP>, token_issuer: Arc<TI>) -> Self {
        Self {
            user_provider,
            client_provider,
            token_issuer,
        }
    }

    fn issue(&self, identity: Identity) -> Result<LoginOutcome, LoginError> {
        let token = self.token_issuer.issue(&identity)?;
        Ok(LoginOutcome { token, identity })
    }
}

#[async_trait]
impl<UP, CP, TI> LoginServicePort for LoginService<UP, CP, TI>
where
    UP: UserProvider,
    CP: ClientProvider,
    TI: TokenIssuer,
{
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, LoginError> {
        let username = credentials.username();
        let password = credentials.password().expose_secret();

        tracing::info!(username = %username, "Login attempt");

        if let Some(user) = self.user_provider.authenticate(username, password).await? {
            tracing::info!(user_id = user.id, username = %username, "Internal user authenticated");
            return self.issue(Identity::Internal(user));
        }

        let client = self
            .client_provider
            .authenticate(username, password)
            .await?
            .filter(ClientRecord::is_active);

        if let Some(record) = client {
            tracing::info!(cliente_id = record.id, username = %username, "Client authenticated");
            let identity =
                ClientIdentity::from_record(&record, SecretString::from(password.to_owned()));
            return self.issue(Identity::Client(identity));
        }

        tracing::warn!(username = %username, "Invalid credentials");
        Err(LoginError::InvalidCredentials)
    }
}
