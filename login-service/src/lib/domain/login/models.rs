use std::fmt;

use secrecy::ExposeSecret;
use secrecy::SecretString;
use serde::Serialize;

use crate::domain::login::errors::LoginError;

/// Status value that makes a client record eligible to sign in.
pub const ACTIVE_CLIENT_STATUS: &str = "activo";

/// Username/password pair submitted to the login endpoint.
///
/// Both fields are guaranteed non-empty. The password is kept as secret
/// material and never shows up in `Debug` output.
#[derive(Debug)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Validate a submitted username/password pair.
    ///
    /// # Errors
    /// * `MissingCredentials` - Either field is empty
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, LoginError> {
        let username = username.into();
        let password = password.into();

        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        Ok(Self {
            username,
            password: SecretString::from(password),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Principal managed by the application user store.
#[derive(Clone, PartialEq, Eq)]
pub struct InternalUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for InternalUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Row of the `clientes` table, without its password column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: i64,
    pub nombre: String,
    pub email: Option<String>,
    pub documento: Option<String>,
    pub telefono: Option<String>,
    pub estado: String,
}

impl ClientRecord {
    /// Whether this client may sign in.
    pub fn is_active(&self) -> bool {
        self.estado == ACTIVE_CLIENT_STATUS
    }

    /// Identifier the client is known by downstream: email if present, else
    /// documento, else the stringified id. Empty strings count as absent.
    pub fn resolved_username(&self) -> String {
        [&self.email, &self.documento]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Identity adapter built from a matched client record.
#[derive(Debug)]
pub struct ClientIdentity {
    pub id: i64,
    pub username: String,
    password: SecretString,
}

impl ClientIdentity {
    pub fn from_record(record: &ClientRecord, password: SecretString) -> Self {
        Self {
            id: record.id,
            username: record.resolved_username(),
            password,
        }
    }
}

/// Kind of principal that signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Usuario,
    Cliente,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Usuario => "usuario",
            UserType::Cliente => "cliente",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated principal handed to the token issuer.
#[derive(Debug)]
pub enum Identity {
    Internal(InternalUser),
    Client(ClientIdentity),
}

impl Identity {
    pub fn id(&self) -> i64 {
        match self {
            Identity::Internal(user) => user.id,
            Identity::Client(client) => client.id,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Identity::Internal(user) => &user.username,
            Identity::Client(client) => &client.username,
        }
    }

    /// Secret material backing this identity: the stored hash for internal
    /// users, the submitted password for clients.
    pub fn secret(&self) -> &str {
        match self {
            Identity::Internal(user) => &user.password_hash,
            Identity::Client(client) => client.password.expose_secret(),
        }
    }

    pub fn user_type(&self) -> UserType {
        match self {
            Identity::Internal(_) => UserType::Usuario,
            Identity::Client(_) => UserType::Cliente,
        }
    }
}

/// Result of a successful login.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub identity: Identity,
}
