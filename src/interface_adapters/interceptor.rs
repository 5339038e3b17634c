use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::sync::Arc;

use crate::domain::auth::{TokenClaims, authorization_for, is_public_endpoint};
use crate::domain::ports::{Clock, TokenStore};

// Attaches the stored bearer token to outgoing API requests.
#[derive(Clone)]
pub struct TokenInterceptor {
    // Arc<dyn Trait> so any token source or clock can be injected.
    tokens: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
}

impl TokenInterceptor {
    pub fn new(tokens: Arc<dyn TokenStore>, clock: Arc<dyn Clock>) -> Self {
        Self { tokens, clock }
    }

    /// Returns the request with an `Authorization` header added when the
    /// endpoint is protected and a token is stored. Only headers change.
    pub fn intercept(&self, mut request: Request) -> Request {
        let url = request.url().as_str().to_string();
        let token = self.tokens.get_token();
        tracing::debug!(%url, token_exists = token.is_some(), "token interceptor.");

        if is_public_endpoint(&url) {
            tracing::debug!("skipping token for public endpoint.");
            return request;
        }

        let Some(value) = authorization_for(&url, token.as_deref()) else {
            tracing::debug!("no token available.");
            return request;
        };

        // The server is the enforcement point; an expired token is still sent.
        if token
            .as_deref()
            .and_then(TokenClaims::decode)
            .is_some_and(|claims| claims.is_expired(self.clock.now_epoch_seconds()))
        {
            tracing::debug!("stored token has expired.");
        }

        match HeaderValue::from_str(&value) {
            Ok(mut header) => {
                header.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, header);
                tracing::debug!("adding token to request.");
            }
            Err(_) => {
                tracing::warn!("stored token is not a valid header value; sending without it.");
            }
        }

        request
    }
}
