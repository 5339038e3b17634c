// Bearer-token attachment policy for outgoing API requests.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

pub const AUTH_ENDPOINT_MARKER: &str = "/auth/";
pub const SETTINGS_MARKER: &str = "/settings";
pub const ADMIN_SETTINGS_MARKER: &str = "/admin/settings";

/// Endpoints that never carry a bearer token.
///
/// Matching is a plain substring test on the whole URL, query string included,
/// so `/settings` anywhere outside `/admin/settings` exempts the request.
pub fn is_public_endpoint(url: &str) -> bool {
    url.contains(AUTH_ENDPOINT_MARKER)
        || (url.contains(SETTINGS_MARKER) && !url.contains(ADMIN_SETTINGS_MARKER))
}

/// Authorization header value to attach, if any.
pub fn authorization_for(url: &str, token: Option<&str>) -> Option<String> {
    if is_public_endpoint(url) {
        return None;
    }
    token
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

// Claims read from the payload segment of a JWT. Diagnostics only; never verified here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub role: Option<String>,
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decodes the payload of a `header.payload.signature` token.
    pub fn decode(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        // Tolerate padded encoders.
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// A token without an `exp` claim never expires.
    pub fn is_expired(&self, now_epoch_seconds: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_epoch_seconds)
    }
}
