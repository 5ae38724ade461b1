/// Identity Types
///
/// The request-scoped identity produced by verification and the principal
/// record supplied by the credential directory.

use serde::{Deserialize, Serialize};

/// Who a verified access credential says the caller is.
///
/// Derived only from a verified, live access credential and passed along by
/// value for the duration of one request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityContext {
    pub subject: String,
    pub role: String,
}

/// A principal as the external credential directory describes it
#[derive(Debug, Clone)]
pub struct PrincipalRecord {
    pub subject: String,
    pub role: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_context_serializes_subject_and_role() {
        let identity = IdentityContext {
            subject: "alice".to_string(),
            role: "member".to_string(),
        };

        let json = serde_json::to_string(&identity).expect("Failed to serialize identity");
        assert!(json.contains("\"subject\":\"alice\""));
        assert!(json.contains("\"role\":\"member\""));
    }
}
