/// Credential Delivery Helpers
///
/// Pure-string helpers so a transport can carry credentials without knowing
/// anything about their contents: Authorization header assembly and parsing,
/// refresh cookie assembly and parsing, and the logout removal cookie.

use crate::token::Credential;

/// Cookie name under which clients store the refresh credential
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// The two credentials handed out by login and rotation
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: Credential,
    pub refresh: Credential,
}

impl TokenPair {
    /// Authorization header value carrying the access credential
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access.token)
    }

    /// Set-Cookie value storing the refresh credential.
    /// Max-Age matches the credential's full lifetime.
    pub fn refresh_cookie(&self, secure: bool) -> String {
        let secure = if secure { "; Secure" } else { "" };
        format!(
            "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}{}",
            REFRESH_COOKIE_NAME,
            self.refresh.token,
            self.refresh.claims.lifetime_secs(),
            secure
        )
    }
}

/// Set-Cookie value clearing the refresh credential after revocation
pub fn removal_cookie(secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0{}",
        REFRESH_COOKIE_NAME, secure
    )
}

/// Extract the bearer credential from an Authorization header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Extract a named cookie's value from a Cookie header value
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=') {
            if key.trim() == name {
                return Some(value.trim());
            }
        }
    }
    None
}
