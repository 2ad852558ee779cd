/*
[INPUT]:  Credentials and a signed JWT assertion
[OUTPUT]: Access token from the JWT-bearer grant exchange
[POS]:    Auth layer - token acquisition and lifecycle
[UPDATE]: When grant parameters or token lifetime handling change
*/

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use tracing::error;

use crate::auth::claims::{ASSERTION_LIFETIME_SECS, sign_assertion};
use crate::http::{DocusignClient, DocusignError, Result};
use crate::types::{Credentials, OAuthErrorResponse, TokenResponse};

/// Grant type for the JWT-bearer exchange
pub const TOKEN_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Redirect target registered for the one-time consent grant
pub const CONSENT_REDIRECT_URI: &str = "http://localhost:3000/ds/callback";

/// Access token obtained via the JWT-bearer grant.
///
/// Expiry is pinned to the assertion lifetime rather than the server-reported
/// `expires_in`, so a token is never considered live longer than the
/// assertion that bought it.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            issued_at,
            expires_at: issued_at + Duration::seconds(ASSERTION_LIFETIME_SECS),
        }
    }

    /// Bearer value for Authorization headers
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check if the token is past its pinned lifetime
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl DocusignClient {
    /// Exchange a signed JWT assertion for an access token.
    ///
    /// POST /oauth/token
    ///
    /// Callers only ever see the token-stage message; transport and provider
    /// detail is logged here. A `consent_required` rejection yields
    /// [`DocusignError::ConsentRequired`] with the consent URL the operator
    /// must visit once.
    pub async fn request_access_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        match self.exchange_assertion(credentials).await {
            Ok(token) => Ok(token),
            Err(err @ (DocusignError::ConsentRequired { .. } | DocusignError::TokenExchange)) => {
                Err(err)
            }
            Err(err) => {
                error!(error = %err, "token exchange failed");
                Err(DocusignError::TokenExchange)
            }
        }
    }

    async fn exchange_assertion(&self, credentials: &Credentials) -> Result<AccessToken> {
        let issued_at = Utc::now();
        let assertion = sign_assertion(credentials, issued_at)?;

        let params = [
            ("grant_type", TOKEN_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .auth_request(Method::POST, "/oauth/token")?
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: TokenResponse = response.json().await?;
            return Ok(AccessToken::new(body.access_token, issued_at));
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(oauth_error) = serde_json::from_str::<OAuthErrorResponse>(&body) {
            if oauth_error.error == "consent_required" {
                let consent_url = self.consent_url(&credentials.client_id);
                error!(
                    consent_url = %consent_url,
                    "consent has not been granted for this integration key"
                );
                return Err(DocusignError::ConsentRequired { consent_url });
            }
        }

        error!(
            status = status.as_u16(),
            body = %body,
            "token endpoint rejected the assertion"
        );
        Err(DocusignError::TokenExchange)
    }

    /// URL an operator must visit once to grant consent for this
    /// integration key.
    ///
    /// GET {auth}/oauth/auth?response_type=code&...
    pub fn consent_url(&self, client_id: &str) -> String {
        let base = self.auth_base_url().as_str().trim_end_matches('/');
        format!(
            "{base}/oauth/auth?response_type=code&scope=signature%20impersonation&client_id={client_id}&redirect_uri={CONSENT_REDIRECT_URI}"
        )
    }
}
