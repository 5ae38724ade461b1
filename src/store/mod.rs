/// Refresh Credential Store
///
/// The persistent set of live refresh credentials. A record exists exactly
/// while its credential is rotatable; rotation and revocation consume it.
/// Stored keys are SHA-256 digests of the token value (never store the
/// plaintext), but the trait itself speaks plaintext token values so that
/// implementations stay interchangeable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::StoreError;
use crate::token::Credential;

mod memory;
mod postgres;

pub use memory::InMemoryRefreshStore;
pub use postgres::PgRefreshStore;

/// One live refresh credential as the store tracks it
#[derive(Debug, Clone)]
pub struct RefreshRecord {
    pub subject: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl RefreshRecord {
    /// Build the record tracking a freshly issued refresh credential
    pub fn for_credential(credential: &Credential) -> Self {
        // An out-of-range exp is treated as long dead.
        let expires_at = DateTime::from_timestamp(credential.claims.exp, 0)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        Self {
            subject: credential.claims.sub.clone(),
            token: credential.token.clone(),
            expires_at,
        }
    }
}

/// Storage contract for live refresh credentials.
///
/// `delete_by_token` and `replace` are conditional, single-winner
/// operations: with two concurrent calls over the same stored token,
/// exactly one observes `true`. Each method is one store round trip.
#[async_trait]
pub trait RefreshStore: Send + Sync {
    /// Whether a record for this token value is currently stored
    async fn exists(&self, token: &str) -> Result<bool, StoreError>;

    /// Persist a record for a newly issued refresh credential
    async fn insert(&self, record: RefreshRecord) -> Result<(), StoreError>;

    /// Delete the record for this token value, reporting whether it
    /// was present
    async fn delete_by_token(&self, token: &str) -> Result<bool, StoreError>;

    /// Atomically consume `old_token`'s record and persist `record` in its
    /// place. Persists nothing and returns `false` when `old_token` holds no
    /// record, i.e. it was never issued or a concurrent call consumed it.
    async fn replace(&self, old_token: &str, record: RefreshRecord)
        -> Result<bool, StoreError>;

    /// Delete every record belonging to `subject`, returning the count
    async fn delete_by_subject(&self, subject: &str) -> Result<u64, StoreError>;

    /// Delete records expired at `now`, returning the count
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;
}

/// Hash a token value using SHA-256.
///
/// Never store plaintext tokens.
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TokenCategory, TokenCodec};

    #[test]
    fn test_token_hashing() {
        let hash1 = hash_token("some-refresh-credential");
        let hash2 = hash_token("some-refresh-credential");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, "some-refresh-credential");
        // SHA-256 hex digest
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_tokens_different_hashes() {
        assert_ne!(hash_token("first-credential"), hash_token("second-credential"));
    }

    #[test]
    fn test_record_for_credential() {
        let codec = TokenCodec::new(b"test-secret-key-at-least-32-characters-long");
        let credential = codec
            .issue(
                TokenCategory::Refresh,
                "alice",
                "member",
                chrono::Duration::seconds(86_400),
            )
            .expect("Failed to issue credential");

        let record = RefreshRecord::for_credential(&credential);

        assert_eq!(record.subject, "alice");
        assert_eq!(record.token, credential.token);
        assert_eq!(record.expires_at.timestamp(), credential.claims.exp);
    }
}
