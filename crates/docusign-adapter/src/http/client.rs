/*
[INPUT]:  HTTP configuration (auth base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{DocusignError, Result};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL for the DocuSign developer auth server
const AUTH_BASE_URL: &str = "https://account-d.docusign.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the DocuSign REST API.
///
/// Only the auth server URL is fixed up front. The eSignature base URI is
/// account-specific and resolved at runtime from the userinfo endpoint, so
/// API requests are built from absolute URLs the caller supplies.
#[derive(Debug)]
pub struct DocusignClient {
    http_client: Client,
    auth_base_url: Url,
}

impl DocusignClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_auth_base_url(config, AUTH_BASE_URL)
    }

    /// Create a new client with a custom auth server URL (for testing)
    pub fn with_config_and_auth_base_url(
        config: ClientConfig,
        auth_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            auth_base_url: Url::parse(auth_base_url)?,
        })
    }

    /// Auth server URL this client talks to
    pub fn auth_base_url(&self) -> &Url {
        &self.auth_base_url
    }

    /// Build full URL for auth endpoints
    fn auth_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.auth_base_url.join(endpoint)?)
    }

    /// Build request builder for auth server endpoints
    pub(crate) fn auth_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.auth_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder for an absolute eSignature API URL
    pub(crate) fn api_request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let url = Url::parse(url)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and deserialize a successful JSON response.
    ///
    /// Non-2xx responses become [`DocusignError::Api`] carrying the status
    /// and raw body so callers can classify the failure.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DocusignError::api_error(status, body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DocusignClient::new().unwrap();
        assert_eq!(client.auth_base_url().as_str(), "https://account-d.docusign.com/");
    }

    #[test]
    fn test_custom_auth_base_url() {
        let client = DocusignClient::with_config_and_auth_base_url(
            ClientConfig::default(),
            "http://127.0.0.1:9999",
        )
        .unwrap();
        assert_eq!(client.auth_base_url().host_str(), Some("127.0.0.1"));
    }

    #[test]
    fn test_auth_request_builds_joined_url() {
        let client = DocusignClient::new().unwrap();
        let request = client.auth_request(Method::POST, "/oauth/token").unwrap();
        let built = request.build().unwrap();
        assert_eq!(
            built.url().as_str(),
            "https://account-d.docusign.com/oauth/token"
        );
    }
}
