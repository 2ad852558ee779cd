/*
[INPUT]:  Error sources (HTTP, API, serialization, auth stages)
[OUTPUT]: Structured error types with caller-facing stage messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the DocuSign adapter.
///
/// The stage variants (token exchange, account lookup, envelope submission)
/// carry the exact messages callers are allowed to see. Underlying transport
/// and provider detail is logged where the failure happens, never surfaced.
#[derive(Error, Debug)]
pub enum DocusignError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Token exchange was rejected because the user has not granted consent.
    ///
    /// Indistinguishable from other token failures to callers; the consent
    /// URL is available to operators via [`DocusignError::consent_url`].
    #[error("Failed to generate JWT token")]
    ConsentRequired { consent_url: String },

    /// JWT-bearer grant exchange failed
    #[error("Failed to generate JWT token")]
    TokenExchange,

    /// Userinfo lookup produced no usable account
    #[error("Failed to retrieve base URI")]
    AccountLookup,

    /// Envelope creation was rejected by the provider
    #[error("Failed to create envelope")]
    EnvelopeSubmission,

    /// Signing the JWT assertion failed
    #[error("Assertion signing failed: {0}")]
    Assertion(#[from] jsonwebtoken::errors::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DocusignError {
    /// Check if the error requires operator action rather than a retry
    pub fn is_operator_actionable(&self) -> bool {
        matches!(
            self,
            DocusignError::ConsentRequired { .. } | DocusignError::Config(_)
        )
    }

    /// Get the consent URL when consent is what is missing
    pub fn consent_url(&self) -> Option<&str> {
        match self {
            DocusignError::ConsentRequired { consent_url } => Some(consent_url),
            _ => None,
        }
    }

    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        DocusignError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for DocuSign operations
pub type Result<T> = std::result::Result<T, DocusignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_errors_use_caller_facing_text() {
        assert_eq!(
            DocusignError::TokenExchange.to_string(),
            "Failed to generate JWT token"
        );
        assert_eq!(
            DocusignError::AccountLookup.to_string(),
            "Failed to retrieve base URI"
        );
        assert_eq!(
            DocusignError::EnvelopeSubmission.to_string(),
            "Failed to create envelope"
        );
    }

    #[test]
    fn test_consent_required_matches_token_exchange_text() {
        let err = DocusignError::ConsentRequired {
            consent_url: "https://account-d.docusign.com/oauth/auth".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to generate JWT token");
        assert!(err.is_operator_actionable());
        assert_eq!(
            err.consent_url(),
            Some("https://account-d.docusign.com/oauth/auth")
        );
    }

    #[test]
    fn test_api_error_creation() {
        let err = DocusignError::api_error(StatusCode::BAD_REQUEST, "invalid_grant");
        match err {
            DocusignError::Api { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid_grant");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_operator_actionable_classification() {
        assert!(DocusignError::Config("missing client id".to_string()).is_operator_actionable());
        assert!(!DocusignError::TokenExchange.is_operator_actionable());
        assert!(!DocusignError::AccountLookup.is_operator_actionable());
    }
}
