use serde::Serialize;

use crate::domain::auth::TokenClaims;
use crate::domain::ports::{Clock, TokenStore};

// What the client knows about its stored credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub token_present: bool,
    pub decodable: bool,
    pub subject: Option<String>,
    pub role: Option<String>,
    pub expires_at: Option<i64>,
    pub expired: bool,
}

// Session inspection use case with injected dependencies.
pub struct InspectSessionUseCase<T, C> {
    pub tokens: T,
    pub clock: C,
}

impl<T, C> InspectSessionUseCase<T, C>
where
    T: TokenStore,
    C: Clock,
{
    pub fn execute(&self) -> SessionReport {
        let Some(token) = self.tokens.get_token() else {
            return SessionReport::default();
        };

        match TokenClaims::decode(&token) {
            Some(claims) => SessionReport {
                token_present: true,
                decodable: true,
                expired: claims.is_expired(self.clock.now_epoch_seconds()),
                subject: claims.sub,
                role: claims.role,
                expires_at: claims.exp,
            },
            // Opaque tokens are still valid bearer credentials.
            None => SessionReport {
                token_present: true,
                ..Default::default()
            },
        }
    }
}
