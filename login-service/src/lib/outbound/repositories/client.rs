use async_trait::async_trait;
use auth::PasswordScheme;
use auth::Sha256Scheme;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::login::errors::LoginError;
use crate::domain::login::models::ClientRecord;
use crate::domain::login::models::ACTIVE_CLIENT_STATUS;
use crate::domain::login::ports::ClientProvider;

/// Client records stored in `clientes`.
///
/// The password column holds `hex(sha256(salt || password))`; the digest of the
/// submitted password is computed here and compared inside the query.
pub struct PostgresClientProvider {
    pool: PgPool,
    scheme: Sha256Scheme,
}

impl PostgresClientProvider {
    pub fn new(pool: PgPool, scheme: Sha256Scheme) -> Self {
        Self { pool, scheme }
    }

    fn row_to_client(row: PgRow) -> Result<ClientRecord, LoginError> {
        Ok(ClientRecord {
            id: row.try_get("id").map_err(database_error)?,
            nombre: row.try_get("nombre").map_err(database_error)?,
            email: row.try_get("email").map_err(database_error)?,
            documento: row.try_get("documento").map_err(database_error)?,
            telefono: row.try_get("telefono").map_err(database_error)?,
            estado: row.try_get("estado").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl ClientProvider for PostgresClientProvider {
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<ClientRecord>, LoginError> {
        let digest = self.scheme.hash(password)?;

        // One connection, one query; returned to the pool when it goes out of scope.
        let mut connection = self.pool.acquire().await.map_err(database_error)?;

        let row = sqlx::query(
            r#"
            SELECT id, nombre, email, documento, telefono, estado
            FROM clientes
            WHERE (email = $1 OR documento = $1)
              AND lower(password) = $2
              AND estado = $3
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(identifier)
        .bind(&digest)
        .bind(ACTIVE_CLIENT_STATUS)
        .fetch_optional(&mut *connection)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_client).transpose()
    }
}

fn database_error(e: sqlx::Error) -> LoginError {
    LoginError::Database(e.to_string())
}
