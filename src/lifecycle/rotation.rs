/// Refresh Rotation
///
/// Exchanges a live, recognized refresh credential for a brand-new pair and
/// consumes the old one in the same stroke. Every presented credential walks
/// the same checks in order; each failure is a distinct verdict:
///
/// 1. missing            -> MissingToken
/// 2. signature/parse    -> InvalidToken
/// 3. past its lifetime  -> ExpiredToken
/// 4. not a refresh      -> WrongCategory
/// 5. no stored record   -> NotRecognized
///
/// Step 5 is the replay defense: a rotated or revoked credential has no
/// record anymore, so presenting it again dies here even though its
/// signature still verifies.

use std::sync::Arc;

use crate::configuration::TokenSettings;
use crate::delivery::TokenPair;
use crate::error::AuthError;
use crate::store::{RefreshRecord, RefreshStore};
use crate::token::{TokenCategory, TokenCodec};

pub struct RotationService {
    codec: Arc<TokenCodec>,
    store: Arc<dyn RefreshStore>,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl RotationService {
    pub fn new(
        codec: Arc<TokenCodec>,
        store: Arc<dyn RefreshStore>,
        settings: &TokenSettings,
    ) -> Self {
        Self {
            codec,
            store,
            access_ttl: settings.access_ttl(),
            refresh_ttl: settings.refresh_ttl(),
        }
    }

    /// Rotate a refresh credential, returning the replacement pair.
    /// The pair carries the newly minted refresh credential, the same one
    /// that now holds the store record.
    ///
    /// # Errors
    /// One verdict per failed check, see the module header. Of two
    /// concurrent rotations of the same credential exactly one succeeds;
    /// the other observes `NotRecognized`.
    pub async fn rotate(&self, refresh_raw: Option<&str>) -> Result<TokenPair, AuthError> {
        let raw = refresh_raw.ok_or(AuthError::MissingToken)?;
        let claims = self.codec.verify_live(raw)?;

        if claims.category != TokenCategory::Refresh {
            tracing::warn!(
                category = %claims.category,
                subject = %claims.sub,
                "Non-refresh credential presented for rotation"
            );
            return Err(AuthError::WrongCategory);
        }

        let access = self.codec.issue(
            TokenCategory::Access,
            &claims.sub,
            &claims.role,
            self.access_ttl,
        )?;
        let refresh = self.codec.issue(
            TokenCategory::Refresh,
            &claims.sub,
            &claims.role,
            self.refresh_ttl,
        )?;

        // One conditional store call decides any race: the old record is
        // consumed and the new one persisted, or nothing happens at all.
        let replaced = self
            .store
            .replace(raw, RefreshRecord::for_credential(&refresh))
            .await?;
        if !replaced {
            tracing::warn!(
                subject = %claims.sub,
                "Rotation attempt with an unknown or already-consumed refresh credential"
            );
            return Err(AuthError::NotRecognized);
        }

        tracing::info!(subject = %claims.sub, "Refresh credential rotated");

        Ok(TokenPair { access, refresh })
    }
}
