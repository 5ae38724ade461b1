/// Credential Directory
///
/// The external collaborator holding principals and their password hashes.
/// Registration and credential storage live outside this crate; the gate
/// only ever asks one question, answered through this trait.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AuthError, StoreError};
use crate::identity::PrincipalRecord;
use crate::password::hash_password;

#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Fetch the principal registered under `username`, if any
    async fn lookup(&self, username: &str) -> Result<Option<PrincipalRecord>, StoreError>;
}

/// Map-backed directory for tests and demos.
///
/// Provisioned up front and immutable afterwards, so lookups need no lock.
#[derive(Default)]
pub struct InMemoryDirectory {
    principals: HashMap<String, PrincipalRecord>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal, hashing the password at provisioning time
    ///
    /// # Errors
    /// Returns error if password hashing fails
    pub fn register(&mut self, subject: &str, role: &str, password: &str) -> Result<(), AuthError> {
        let password_hash = hash_password(password)?;
        self.principals.insert(
            subject.to_string(),
            PrincipalRecord {
                subject: subject.to_string(),
                role: role.to_string(),
                password_hash,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl CredentialDirectory for InMemoryDirectory {
    async fn lookup(&self, username: &str) -> Result<Option<PrincipalRecord>, StoreError> {
        Ok(self.principals.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_registered_principal() {
        let mut directory = InMemoryDirectory::new();
        directory
            .register("alice", "member", "a fine password")
            .expect("Failed to register principal");

        let record = directory
            .lookup("alice")
            .await
            .expect("lookup failed")
            .expect("principal missing");

        assert_eq!(record.subject, "alice");
        assert_eq!(record.role, "member");
        assert_ne!(record.password_hash, "a fine password");
    }

    #[tokio::test]
    async fn test_lookup_unknown_principal() {
        let directory = InMemoryDirectory::new();

        let record = directory.lookup("nobody").await.expect("lookup failed");
        assert!(record.is_none());
    }
}
