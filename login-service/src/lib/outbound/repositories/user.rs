use async_trait::async_trait;
use auth::Argon2Scheme;
use auth::PasswordScheme;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::login::errors::LoginError;
use crate::domain::login::models::InternalUser;
use crate::domain::login::ports::UserProvider;

/// Application users stored in `users`, hashed with Argon2id.
pub struct PostgresUserProvider {
    pool: PgPool,
    scheme: Argon2Scheme,
}

impl PostgresUserProvider {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            scheme: Argon2Scheme::new(),
        }
    }

    fn row_to_user(row: PgRow) -> Result<InternalUser, LoginError> {
        Ok(InternalUser {
            id: row.try_get("id").map_err(database_error)?,
            username: row.try_get("username").map_err(database_error)?,
            password_hash: row.try_get("password_hash").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl UserProvider for PostgresUserProvider {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<InternalUser>, LoginError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        let Some(row) = row else {
            tracing::debug!(username = %username, "No internal user with this username");
            return Ok(None);
        };

        let user = Self::row_to_user(row)?;

        if self.scheme.verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            tracing::debug!(user_id = user.id, "Internal user password mismatch");
            Ok(None)
        }
    }
}

fn database_error(e: sqlx::Error) -> LoginError {
    LoginError::Database(e.to_string())
}
