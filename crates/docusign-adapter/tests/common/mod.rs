/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for docusign-adapter tests

use chrono::Utc;
use docusign_adapter::{AccessToken, ClientConfig, Credentials, DocusignClient};
use wiremock::MockServer;

/// Real 2048-bit RSA keypair so RS256 signing runs for real
pub const TEST_PRIVATE_KEY: &str = include_str!("../data/test_rsa_key.pem");
#[allow(dead_code)]
pub const TEST_PUBLIC_KEY: &str = include_str!("../data/test_rsa_pub.pem");

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose auth server points at the mock
pub fn client_for(server: &MockServer) -> DocusignClient {
    DocusignClient::with_config_and_auth_base_url(ClientConfig::default(), &server.uri())
        .expect("client should build against mock server")
}

/// Credentials carrying the test RSA key
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test-client-id".to_string(),
        account_id: "test-account-id".to_string(),
        user_id: "test-user-id".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
    }
}

/// Access token that is still inside its lifetime
#[allow(dead_code)]
pub fn fresh_access_token() -> AccessToken {
    AccessToken::new("test-access-token", Utc::now())
}
