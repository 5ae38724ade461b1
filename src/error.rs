/// Error Types for the Token Lifecycle
///
/// This module provides the error taxonomy for the whole crate:
/// 1. Codec-Level Errors (signature and structure problems)
/// 2. Storage-Level Errors (connection and query problems)
/// 3. Operation-Level Errors (what lifecycle callers actually see)
///
/// Codec and storage errors never leak raw to callers; the lifecycle
/// services translate them into `AuthError` variants with generic display
/// strings so that responses reveal nothing an attacker can enumerate.

use std::error::Error as StdError;
use std::fmt;

/// ============================================================================
/// 1. CODEC-LEVEL ERRORS
/// ============================================================================

/// Errors produced while encoding or verifying a signed credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    SignatureInvalid,
    Expired,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "token is malformed"),
            TokenError::SignatureInvalid => write!(f, "token signature is invalid"),
            TokenError::Expired => write!(f, "token has expired"),
        }
    }
}

impl StdError for TokenError {}

/// ============================================================================
/// 2. STORAGE-LEVEL ERRORS
/// ============================================================================

/// Refresh store operation errors
#[derive(Debug, Clone)]
pub enum StoreError {
    ConnectionPool(String),
    Query(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ConnectionPool(msg) => write!(f, "store connection error: {}", msg),
            StoreError::Query(msg) => write!(f, "store query error: {}", msg),
        }
    }
}

impl StdError for StoreError {}

/// ============================================================================
/// 3. OPERATION-LEVEL ERRORS
/// ============================================================================

/// Errors returned by the lifecycle operations (login, rotation, revocation).
///
/// The variants are deliberately finer-grained than their display strings:
/// callers can branch on the exact cause while the rendered message keeps
/// more than one internal cause behind the same generic wording.
#[derive(Debug)]
pub enum AuthError {
    /// No credential was presented at all
    MissingToken,
    /// The credential failed signature or structural verification
    InvalidToken,
    /// The credential verified but its lifetime has passed
    ExpiredToken,
    /// The credential belongs to the other category
    WrongCategory,
    /// The credential is not present in the store (never issued or consumed)
    NotRecognized,
    /// Unknown principal or wrong password, collapsed to one cause
    AuthFailure,
    /// The store could not be reached; the only transient variant
    StoreUnavailable(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingToken => write!(f, "missing refresh token"),
            AuthError::InvalidToken => write!(f, "invalid refresh token"),
            AuthError::ExpiredToken => write!(f, "refresh token expired"),
            AuthError::WrongCategory => write!(f, "invalid refresh token"),
            AuthError::NotRecognized => write!(f, "invalid refresh token"),
            AuthError::AuthFailure => write!(f, "invalid username or password"),
            AuthError::StoreUnavailable(e) => write!(f, "credential store unavailable: {}", e),
        }
    }
}

impl StdError for AuthError {}

impl AuthError {
    /// Whether retrying the same call can succeed without client action.
    /// Only store outages qualify; every other variant is a verdict.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::StoreUnavailable(_))
    }
}

// ============================================================================
// FROM IMPLEMENTATIONS
// ============================================================================

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::StoreUnavailable(err)
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::ExpiredToken,
            TokenError::Malformed | TokenError::SignatureInvalid => AuthError::InvalidToken,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let error_msg = err.to_string();

        if error_msg.contains("pool") || error_msg.contains("connect") {
            StoreError::ConnectionPool(error_msg)
        } else {
            StoreError::Query(error_msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::Malformed.to_string(), "token is malformed");
        assert_eq!(
            TokenError::SignatureInvalid.to_string(),
            "token signature is invalid"
        );
        assert_eq!(TokenError::Expired.to_string(), "token has expired");
    }

    #[test]
    fn test_wrong_category_and_not_recognized_render_identically() {
        // Both causes must stay indistinguishable in rendered output.
        assert_eq!(
            AuthError::WrongCategory.to_string(),
            AuthError::NotRecognized.to_string()
        );
    }

    #[test]
    fn test_token_error_conversion() {
        let auth_err: AuthError = TokenError::Expired.into();
        match auth_err {
            AuthError::ExpiredToken => (),
            _ => panic!("Expected ExpiredToken error"),
        }

        let auth_err: AuthError = TokenError::SignatureInvalid.into();
        match auth_err {
            AuthError::InvalidToken => (),
            _ => panic!("Expected InvalidToken error"),
        }
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Query("syntax error".to_string());
        let auth_err: AuthError = store_err.into();
        match auth_err {
            AuthError::StoreUnavailable(_) => (),
            _ => panic!("Expected StoreUnavailable error"),
        }
    }

    #[test]
    fn test_only_store_outage_is_transient() {
        assert!(AuthError::StoreUnavailable(StoreError::ConnectionPool(
            "pool timed out".to_string()
        ))
        .is_transient());
        assert!(!AuthError::MissingToken.is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::ExpiredToken.is_transient());
        assert!(!AuthError::WrongCategory.is_transient());
        assert!(!AuthError::NotRecognized.is_transient());
        assert!(!AuthError::AuthFailure.is_transient());
    }
}
