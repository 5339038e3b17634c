use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::domain::errors::FetchError;
use crate::interface_adapters::interceptor::TokenInterceptor;
use crate::interface_adapters::protocol::ErrorResponse;

// Thin wrapper around reqwest for the backend REST API.
// Every request goes through the token interceptor before it is sent.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    interceptor: TokenInterceptor,
}

impl ApiClient {
    pub fn new(
        base_url: Url,
        timeout: Duration,
        interceptor: TokenInterceptor,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            interceptor,
        })
    }

    // Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs `segments` below the base URL and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        let request = self
            .http
            .get(url)
            .query(query)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let request = self.interceptor.intercept(request);

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = res.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }

        // Keep upstream status/message so callers can tell 4xx from 5xx.
        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(ErrorResponse::into_message);
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        res.json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}
