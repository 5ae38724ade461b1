/// Credential Encoding and Verification
///
/// Signs and verifies both credential categories with a single shared
/// HS256 secret. The codec is stateless apart from the derived keys and is
/// shared freely between concurrent callers.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::error::TokenError;
use crate::token::claims::{Claims, TokenCategory};

/// A signed credential together with its decoded claims
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub claims: Claims,
}

/// Signs and verifies credentials against one shared secret
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed credential expiring `ttl` from now
    ///
    /// # Arguments
    /// * `category` - Access or Refresh
    /// * `subject` - Principal username
    /// * `role` - Authorization role label
    /// * `ttl` - Credential lifetime
    ///
    /// # Errors
    /// Returns error if signing fails
    pub fn issue(
        &self,
        category: TokenCategory,
        subject: &str,
        role: &str,
        ttl: chrono::Duration,
    ) -> Result<Credential, TokenError> {
        let claims = Claims::new(category, subject, role, ttl);

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::warn!("Credential signing failed: {}", e);
            TokenError::Malformed
        })?;

        Ok(Credential { token, claims })
    }

    /// Verify signature and structure, returning the decoded claims.
    ///
    /// Expiry is deliberately not checked here: an expired-but-well-signed
    /// credential still decodes, so that callers can tell expiry apart from
    /// tampering. Callers that need a live credential use `verify_live`.
    ///
    /// # Errors
    /// Returns `Malformed` if the value cannot be parsed and
    /// `SignatureInvalid` if it was tampered with or signed elsewhere
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Credential verification rejected: {}", e);
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::SignatureInvalid
                    }
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                }
            })
    }

    /// Verify signature and structure, then reject credentials past their
    /// lifetime with `Expired`
    ///
    /// # Errors
    /// Returns the `verify` errors plus `Expired`
    pub fn verify_live(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.verify(token)?;
        if claims.is_expired() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
