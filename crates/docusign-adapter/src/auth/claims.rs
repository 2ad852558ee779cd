/*
[INPUT]:  Integration key credentials and signing time
[OUTPUT]: Signed RS256 JWT assertion for the token exchange
[POS]:    Auth layer - assertion construction and signing
[UPDATE]: When grant parameters or assertion lifetime change
*/

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::http::Result;
use crate::types::Credentials;

/// Audience the auth server expects (bare host, no scheme)
pub const JWT_AUDIENCE: &str = "account-d.docusign.com";

/// Scopes requested with every assertion
pub const JWT_SCOPE: &str = "signature impersonation";

/// Assertion validity window in seconds
pub const ASSERTION_LIFETIME_SECS: i64 = 600;

/// Claims carried by the JWT-bearer assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub scope: String,
}

impl AssertionClaims {
    /// Build claims for the given credentials, valid from `issued_at`
    pub fn new(credentials: &Credentials, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            iss: credentials.client_id.clone(),
            sub: credentials.user_id.clone(),
            aud: JWT_AUDIENCE.to_string(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
            scope: JWT_SCOPE.to_string(),
        }
    }
}

/// Sign an RS256 assertion impersonating the configured user.
///
/// The private key must be PEM-encoded RSA. Key parse failures and signing
/// failures both surface as [`DocusignError::Assertion`].
///
/// [`DocusignError::Assertion`]: crate::http::DocusignError::Assertion
pub fn sign_assertion(credentials: &Credentials, issued_at: DateTime<Utc>) -> Result<String> {
    let claims = AssertionClaims::new(credentials, issued_at);
    let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())?;
    let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    const TEST_PRIVATE_KEY: &str = include_str!("../../tests/data/test_rsa_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../../tests/data/test_rsa_pub.pem");

    fn test_credentials() -> Credentials {
        Credentials {
            client_id: "integration-key-1".to_string(),
            account_id: "account-1".to_string(),
            user_id: "api-user-1".to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
        }
    }

    #[test]
    fn test_claims_window_is_ten_minutes() {
        let issued_at = Utc::now();
        let claims = AssertionClaims::new(&test_credentials(), issued_at);

        assert_eq!(claims.iss, "integration-key-1");
        assert_eq!(claims.sub, "api-user-1");
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.scope, JWT_SCOPE);
        assert_eq!(claims.exp - claims.iat, ASSERTION_LIFETIME_SECS);
    }

    #[test]
    fn test_signed_assertion_verifies_with_public_key() {
        let credentials = test_credentials();
        let token = sign_assertion(&credentials, Utc::now()).unwrap();

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[JWT_AUDIENCE]);

        let decoding_key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
        let decoded = decode::<AssertionClaims>(&token, &decoding_key, &validation).unwrap();

        assert_eq!(decoded.claims.iss, "integration-key-1");
        assert_eq!(decoded.claims.sub, "api-user-1");
        assert_eq!(decoded.claims.scope, "signature impersonation");
    }

    #[test]
    fn test_malformed_private_key_is_rejected() {
        let mut credentials = test_credentials();
        credentials.private_key = "not a pem key".to_string();

        let result = sign_assertion(&credentials, Utc::now());
        assert!(result.is_err());
    }
}
