/// Revocation
///
/// Ends a session by deleting the refresh credential's record. Presented
/// credentials walk the same five checks as rotation; on success the record
/// is gone and the caller clears client-side storage with the removal
/// cookie. Terminal: a revoked credential can never rotate or revoke again.

use std::sync::Arc;

use crate::error::AuthError;
use crate::store::RefreshStore;
use crate::token::{TokenCategory, TokenCodec};

pub struct RevocationHandler {
    codec: Arc<TokenCodec>,
    store: Arc<dyn RefreshStore>,
}

impl RevocationHandler {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn RefreshStore>) -> Self {
        Self { codec, store }
    }

    /// Revoke one refresh credential
    ///
    /// # Errors
    /// Same verdicts as rotation: `MissingToken`, `InvalidToken`,
    /// `ExpiredToken`, `WrongCategory`, `NotRecognized`
    pub async fn revoke(&self, refresh_raw: Option<&str>) -> Result<(), AuthError> {
        let raw = refresh_raw.ok_or(AuthError::MissingToken)?;
        let claims = self.codec.verify_live(raw)?;

        if claims.category != TokenCategory::Refresh {
            tracing::warn!(
                category = %claims.category,
                subject = %claims.sub,
                "Non-refresh credential presented for revocation"
            );
            return Err(AuthError::WrongCategory);
        }

        let deleted = self.store.delete_by_token(raw).await?;
        if !deleted {
            tracing::warn!(
                subject = %claims.sub,
                "Revocation attempt with an unknown or already-consumed refresh credential"
            );
            return Err(AuthError::NotRecognized);
        }

        tracing::info!(subject = %claims.sub, "Refresh credential revoked");
        Ok(())
    }

    /// Revoke every live refresh credential of a subject, returning the
    /// number of sessions ended
    ///
    /// # Errors
    /// Returns `StoreUnavailable` when the store cannot be reached
    pub async fn revoke_all(&self, subject: &str) -> Result<u64, AuthError> {
        let deleted = self.store.delete_by_subject(subject).await?;

        tracing::info!(
            subject = subject,
            sessions = deleted,
            "Revoked all refresh credentials for subject"
        );
        Ok(deleted)
    }
}
