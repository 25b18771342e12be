//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use platform::password::{PasswordDigest, PasswordSalt};
use sqlx::PgPool;

use crate::domain::entity::UserCredential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn create_if_absent(&self, credential: &UserCredential) -> AuthResult<bool> {
        // ON CONFLICT DO NOTHING is the store's atomic check-and-set on
        // primary-key existence; an existing row is never overwritten
        let inserted = sqlx::query(
            r#"
            INSERT INTO user_credentials (
                username,
                salt,
                hashed_password,
                created_at
            ) VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(credential.username.as_str())
        .bind(credential.salt.as_str())
        .bind(credential.password_digest.encoded())
        .bind(credential.created_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserCredential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                username,
                salt,
                hashed_password,
                created_at
            FROM user_credentials
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    username: String,
    salt: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<UserCredential> {
        let username = UserName::from_db(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid stored username: {}", e)))?;

        let salt = PasswordSalt::from_stored(&self.salt)
            .map_err(|e| AuthError::Internal(format!("Invalid stored salt: {}", e)))?;

        let password_digest = PasswordDigest::from_stored(&self.hashed_password)
            .map_err(|e| AuthError::Internal(format!("Invalid stored digest: {}", e)))?;

        Ok(UserCredential {
            username,
            salt,
            password_digest,
            created_at: self.created_at,
        })
    }
}
