use async_trait::async_trait;

use crate::domain::login::errors::LoginError;
use crate::domain::login::models::ClientRecord;
use crate::domain::login::models::Credentials;
use crate::domain::login::models::Identity;
use crate::domain::login::models::InternalUser;
use crate::domain::login::models::LoginOutcome;

/// Port for the login dispatcher.
#[async_trait]
pub trait LoginServicePort: Send + Sync + 'static {
    /// Authenticate credentials against the user store, then the client store.
    ///
    /// # Arguments
    /// * `credentials` - Validated username/password pair
    ///
    /// # Returns
    /// Issued token together with the identity that matched
    ///
    /// # Errors
    /// * `InvalidCredentials` - Neither store accepted the credentials
    /// * `Database`, `Password`, `Token` - A collaborator failed
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, LoginError>;
}

/// Application user store.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Look up and verify an application user.
    ///
    /// # Returns
    /// The user, or None when the username is unknown or the password is wrong
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    /// * `Password` - Stored hash could not be checked
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<InternalUser>, LoginError>;
}

/// Client record store.
#[async_trait]
pub trait ClientProvider: Send + Sync + 'static {
    /// Find an active client whose email or documento equals `identifier` and
    /// whose stored hash matches `password`.
    ///
    /// # Returns
    /// The matching record, or None
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<ClientRecord>, LoginError>;
}

/// Mints signed credentials for an authenticated identity.
pub trait TokenIssuer: Send + Sync + 'static {
    /// # Errors
    /// * `Token` - Claims could not be encoded or signed
    fn issue(&self, identity: &Identity) -> Result<String, LoginError>;
}
