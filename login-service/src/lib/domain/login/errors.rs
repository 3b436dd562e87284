use thiserror::Error;

/// Top-level error for login operations.
///
/// `MissingCredentials` and `InvalidCredentials` are the expected outcomes of a
/// rejected login; every other variant is a fault.
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    #[error("Usuario y contraseña son requeridos")]
    MissingCredentials,

    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),
}

impl LoginError {
    /// True for variants that represent an unexpected failure rather than a
    /// rejected login.
    pub fn is_fault(&self) -> bool {
        !matches!(
            self,
            LoginError::MissingCredentials | LoginError::InvalidCredentials
        )
    }
}
