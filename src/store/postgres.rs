/// Postgres Refresh Store
///
/// Database-backed implementation. Conditional deletes carry the
/// single-winner guarantee: under READ COMMITTED, two concurrent
/// transactions deleting the same row report one affected row between them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::configuration::DatabaseSettings;
use crate::error::StoreError;
use crate::store::{hash_token, RefreshRecord, RefreshStore};

pub struct PgRefreshStore {
    pool: PgPool,
}

impl PgRefreshStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a fresh pool from database settings
    ///
    /// # Errors
    /// Returns error if the connection cannot be established
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = PgPool::connect(&settings.connection_string()).await?;
        Ok(Self::new(pool))
    }

    /// Apply the store's schema migrations
    ///
    /// # Errors
    /// Returns error if a migration fails to apply
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[async_trait]
impl RefreshStore for PgRefreshStore {
    async fn exists(&self, token: &str) -> Result<bool, StoreError> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token_hash = $1)
            "#,
        )
        .bind(hash_token(token))
        .fetch_one(&self.pool)
        .await?;

        Ok(found)
    }

    async fn insert(&self, record: RefreshRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token_hash, subject, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(hash_token(&record.token))
        .bind(&record.subject)
        .bind(record.expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens WHERE token_hash = $1
            "#,
        )
        .bind(hash_token(token))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn replace(
        &self,
        old_token: &str,
        record: RefreshRecord,
    ) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM refresh_tokens WHERE token_hash = $1
            "#,
        )
        .bind(hash_token(old_token))
        .execute(&mut tx)
        .await?;

        // Dropping the transaction rolls back; nothing was persisted.
        if deleted.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token_hash, subject, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(hash_token(&record.token))
        .bind(&record.subject)
        .bind(record.expires_at)
        .bind(Utc::now())
        .execute(&mut tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete_by_subject(&self, subject: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens WHERE subject = $1
            "#,
        )
        .bind(subject)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens WHERE expires_at <= $1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            purged = result.rows_affected(),
            "Purged expired refresh records"
        );
        Ok(result.rows_affected())
    }
}
