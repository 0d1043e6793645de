use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserCredential;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserCredentialStore;

pub struct PostgresUserCredentialStore {
    pool: PgPool,
}

impl PostgresUserCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserCredentialRecord {
    id: Uuid,
    email: String,
    password_hash: String,
    salt: String,
    hash_algorithm: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserCredentialRecord> for UserCredential {
    type Error = UserError;

    fn try_from(r: UserCredentialRecord) -> Result<Self, Self::Error> {
        Ok(UserCredential {
            id: UserId(r.id),
            email: EmailAddress::new(r.email)?,
            password_hash: r.password_hash,
            salt: r.salt,
            hash_algorithm: r.hash_algorithm,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl UserCredentialStore for PostgresUserCredentialStore {
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, salt, hash_algorithm, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(credential.id.0)
        .bind(credential.email.as_str())
        .bind(&credential.password_hash)
        .bind(&credential.salt)
        .bind(&credential.hash_algorithm)
        .bind(credential.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::DuplicateUser(credential.email.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(credential)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredential>, UserError> {
        let record = sqlx::query_as::<_, UserCredentialRecord>(
            r#"
            SELECT id, email, password_hash, salt, hash_algorithm, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        record.map(UserCredential::try_from).transpose()
    }
}
