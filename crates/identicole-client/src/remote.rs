//! Shared HTTP transport for the proxy.
//!
//! Every endpoint of the proxy is a `POST`. Lookups send an empty JSON object
//! and receive a token-array envelope; the school search sends its criteria
//! and receives plain JSON.

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Instrument, Span, debug, warn};
use uuid::Uuid;

use identicole_config::ClientConfig;
use identicole_core::ClientError;
use identicole_token::{TokenError, decode_envelope};

use crate::external_http_span;

const SERVICE_NAME: &str = "identicole-proxy";

/// Error type for a single proxy call.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("proxy answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode envelope: {0}")]
    Envelope(#[from] TokenError),

    #[error("base URL {0} cannot carry path segments")]
    InvalidBaseUrl(String),
}

/// `reqwest` client bound to one proxy base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    base_url: Url,
}

impl RemoteClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidConfig` if the base URL does not parse or
    /// cannot be extended with path segments, or if the HTTP client cannot be
    /// built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base URL {:?}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(
                RemoteError::InvalidBaseUrl(config.base_url.clone()).to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Posts an empty JSON object and decodes the token-array envelope in the
    /// answer.
    pub async fn post_envelope<T>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, RemoteError>
    where
        T: DeserializeOwned,
    {
        let span = external_http_span!(SERVICE_NAME, "POST", url.as_str());

        async move {
            let request = self
                .http
                .post(url)
                .query(query)
                .json(&serde_json::Map::new());
            let response = self.send(request).await?;
            let envelope: Vec<String> = response.json().await?;
            let records = decode_envelope(&envelope)?;
            Ok(records)
        }
        .instrument(span)
        .await
    }

    /// Posts `body` as JSON and deserializes the plain JSON answer.
    pub async fn post_json<B, R>(&self, url: Url, body: &B) -> Result<R, RemoteError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let span = external_http_span!(SERVICE_NAME, "POST", url.as_str());

        async move {
            let response = self.send(self.http.post(url).json(body)).await?;
            Ok(response.json().await?)
        }
        .instrument(span)
        .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let request_id = Uuid::new_v4();
        let span = Span::current();
        span.record("request_id", tracing::field::display(request_id));

        let started = Instant::now();
        let response = request
            .header("x-request-id", request_id.to_string())
            .send()
            .await?;
        let status = response.status();
        span.record("http.status_code", status.as_u16());

        if !status.is_success() {
            warn!(
                request_id = %request_id,
                status = %status.as_u16(),
                latency_ms = %started.elapsed().as_millis(),
                "Proxy returned an error status"
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        debug!(
            request_id = %request_id,
            status = %status.as_u16(),
            latency_ms = %started.elapsed().as_millis(),
            "Proxy responded"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> RemoteClient {
        RemoteClient::from_config(&ClientConfig::default().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client_for("http://localhost:4000");
        let url = client.endpoint(&["api", "distrito", "15", "01"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/distrito/15/01");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client_for("http://localhost:4000/proxy");
        let url = client.endpoint(&["colegios"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/proxy/colegios");
    }

    #[test]
    fn test_endpoint_encodes_opaque_codes() {
        let client = client_for("http://localhost:4000");
        let url = client.endpoint(&["api", "provincia", "1/5"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/provincia/1%2F5");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        let err = RemoteClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_cannot_be_a_base_url() {
        let config = ClientConfig::default().with_base_url("mailto:someone@example.com");
        let err = RemoteClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
