/// Request Authentication
///
/// Verifies the access credential presented with a request and produces the
/// request-scoped identity. Stateless: no store lookup on the request path,
/// just signature, lifetime, and category checks against the shared codec.

use std::sync::Arc;

use crate::identity::IdentityContext;
use crate::token::{TokenCategory, TokenCodec};

pub struct RequestAuthenticator {
    codec: Arc<TokenCodec>,
}

impl RequestAuthenticator {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Resolve the identity presented by a request, if any.
    ///
    /// An absent, unverifiable, expired, or non-access credential yields
    /// `None` and the request proceeds anonymously; failure here is never an
    /// error. A refresh credential is deliberately worthless on this path.
    pub fn identify(&self, raw: Option<&str>) -> Option<IdentityContext> {
        let raw = raw?;

        let claims = match self.codec.verify_live(raw) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!("Presented credential rejected: {}", e);
                return None;
            }
        };

        if claims.category != TokenCategory::Access {
            tracing::warn!(
                category = %claims.category,
                subject = %claims.sub,
                "Non-access credential presented on a request"
            );
            return None;
        }

        Some(IdentityContext {
            subject: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> (RequestAuthenticator, Arc<TokenCodec>) {
        let codec = Arc::new(TokenCodec::new(
            b"test-secret-key-at-least-32-characters-long",
        ));
        (RequestAuthenticator::new(codec.clone()), codec)
    }

    #[test]
    fn test_valid_access_credential_yields_identity() {
        let (authenticator, codec) = test_authenticator();
        let credential = codec
            .issue(
                TokenCategory::Access,
                "alice",
                "member",
                chrono::Duration::seconds(600),
            )
            .expect("Failed to issue credential");

        let identity = authenticator
            .identify(Some(&credential.token))
            .expect("identity missing");

        assert_eq!(identity.subject, "alice");
        assert_eq!(identity.role, "member");
    }

    #[test]
    fn test_absent_credential_is_anonymous() {
        let (authenticator, _) = test_authenticator();

        assert!(authenticator.identify(None).is_none());
    }

    #[test]
    fn test_garbage_credential_is_anonymous() {
        let (authenticator, _) = test_authenticator();

        assert!(authenticator.identify(Some("not.a.credential")).is_none());
    }

    #[test]
    fn test_expired_credential_is_anonymous() {
        let (authenticator, codec) = test_authenticator();
        let credential = codec
            .issue(
                TokenCategory::Access,
                "alice",
                "member",
                chrono::Duration::seconds(-1),
            )
            .expect("Failed to issue credential");

        assert!(authenticator.identify(Some(&credential.token)).is_none());
    }

    #[test]
    fn test_refresh_credential_is_worthless_on_requests() {
        let (authenticator, codec) = test_authenticator();
        let credential = codec
            .issue(
                TokenCategory::Refresh,
                "alice",
                "member",
                chrono::Duration::seconds(86_400),
            )
            .expect("Failed to issue credential");

        assert!(authenticator.identify(Some(&credential.token)).is_none());
    }

    #[test]
    fn test_foreign_signature_is_anonymous() {
        let (authenticator, _) = test_authenticator();
        let foreign = TokenCodec::new(b"another-secret-key-at-least-32-characters");
        let credential = foreign
            .issue(
                TokenCategory::Access,
                "alice",
                "member",
                chrono::Duration::seconds(600),
            )
            .expect("Failed to issue credential");

        assert!(authenticator.identify(Some(&credential.token)).is_none());
    }
}
