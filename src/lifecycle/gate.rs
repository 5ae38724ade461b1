/// Login Gate
///
/// Exchanges a username and password for the initial credential pair.
/// The password check goes through the external credential directory;
/// the refresh record is durable in the store before the pair is returned.

use std::sync::Arc;

use crate::configuration::TokenSettings;
use crate::delivery::TokenPair;
use crate::directory::CredentialDirectory;
use crate::error::AuthError;
use crate::password::verify_password;
use crate::store::{RefreshRecord, RefreshStore};
use crate::token::{TokenCategory, TokenCodec};

pub struct AuthenticationGate {
    codec: Arc<TokenCodec>,
    store: Arc<dyn RefreshStore>,
    directory: Arc<dyn CredentialDirectory>,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl AuthenticationGate {
    pub fn new(
        codec: Arc<TokenCodec>,
        store: Arc<dyn RefreshStore>,
        directory: Arc<dyn CredentialDirectory>,
        settings: &TokenSettings,
    ) -> Self {
        Self {
            codec,
            store,
            directory,
            access_ttl: settings.access_ttl(),
            refresh_ttl: settings.refresh_ttl(),
        }
    }

    /// Authenticate a principal by password and issue the first pair
    ///
    /// # Errors
    /// Returns `AuthFailure` for an unknown username and for a wrong
    /// password alike (no principal enumeration), `StoreUnavailable` when
    /// the directory or the store cannot be reached
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let principal = self.directory.lookup(username).await?.ok_or_else(|| {
            tracing::warn!("Login attempt for unknown principal");
            AuthError::AuthFailure
        })?;

        let password_valid = verify_password(password, &principal.password_hash)?;
        if !password_valid {
            tracing::warn!(subject = %principal.subject, "Login attempt with wrong password");
            return Err(AuthError::AuthFailure);
        }

        let access = self.codec.issue(
            TokenCategory::Access,
            &principal.subject,
            &principal.role,
            self.access_ttl,
        )?;
        let refresh = self.codec.issue(
            TokenCategory::Refresh,
            &principal.subject,
            &principal.role,
            self.refresh_ttl,
        )?;

        // The record must be durable before the pair leaves this call:
        // a returned refresh credential is immediately rotatable.
        self.store
            .insert(RefreshRecord::for_credential(&refresh))
            .await?;

        tracing::info!(subject = %principal.subject, "Principal logged in");

        Ok(TokenPair { access, refresh })
    }
}
