/// Credential Claims
///
/// Represents the signed payload of an issued credential: the principal,
/// its role, the credential category, and the validity window.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The two credential classes issued by this crate.
///
/// Every credential carries its category explicitly so that a long-lived
/// refresh credential can never be presented where a short-lived access
/// credential is expected, or the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Access,
    Refresh,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCategory::Access => write!(f, "access"),
            TokenCategory::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims carried by both credential categories
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Credential category, never inferred from context
    pub category: TokenCategory,
    /// Subject (principal username)
    pub sub: String,
    /// Authorization role label
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Per-credential nonce; keeps two same-second issuances textually distinct
    pub jti: String,
}

impl Claims {
    /// Create new claims for a principal
    ///
    /// # Arguments
    /// * `category` - Access or Refresh
    /// * `subject` - Principal username
    /// * `role` - Authorization role label
    /// * `ttl` - Credential lifetime from now
    pub fn new(category: TokenCategory, subject: &str, role: &str, ttl: chrono::Duration) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            category,
            sub: subject.to_string(),
            role: role.to_string(),
            exp: now + ttl.num_seconds(),
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if the credential's lifetime has passed.
    /// A credential is live strictly before `exp`; the boundary second counts
    /// as expired.
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.exp
    }

    /// Full lifetime of the credential in seconds
    pub fn lifetime_secs(&self) -> i64 {
        self.exp - self.iat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(
            TokenCategory::Access,
            "alice",
            "member",
            chrono::Duration::seconds(600),
        );

        assert_eq!(claims.category, TokenCategory::Access);
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "member");
        assert_eq!(claims.lifetime_secs(), 600);
        assert!(!claims.is_expired());
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_negative_ttl_is_already_expired() {
        let claims = Claims::new(
            TokenCategory::Refresh,
            "alice",
            "member",
            chrono::Duration::seconds(-1),
        );

        assert!(claims.is_expired());
    }

    #[test]
    fn test_expiry_boundary_counts_as_expired() {
        let mut claims = Claims::new(
            TokenCategory::Access,
            "alice",
            "member",
            chrono::Duration::seconds(600),
        );
        claims.exp = chrono::Utc::now().timestamp();

        assert!(claims.is_expired());
    }

    #[test]
    fn test_category_wire_format() {
        let claims = Claims::new(
            TokenCategory::Refresh,
            "alice",
            "member",
            chrono::Duration::seconds(60),
        );

        let json = serde_json::to_string(&claims).expect("Failed to serialize claims");
        assert!(json.contains("\"category\":\"refresh\""));

        let parsed: Claims = serde_json::from_str(&json).expect("Failed to deserialize claims");
        assert_eq!(parsed.category, TokenCategory::Refresh);
        assert_eq!(parsed.sub, "alice");
    }

    #[test]
    fn test_category_display_matches_wire_format() {
        assert_eq!(TokenCategory::Access.to_string(), "access");
        assert_eq!(TokenCategory::Refresh.to_string(), "refresh");
    }
}
