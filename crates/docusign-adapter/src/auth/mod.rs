/*
[INPUT]:  Integration key credentials
[OUTPUT]: Signed assertions, access tokens, and consent URLs
[POS]:    Auth layer - handles DocuSign JWT-bearer authentication
[UPDATE]: When the grant flow or assertion parameters change
*/

pub mod claims;
pub mod token;

pub use claims::{ASSERTION_LIFETIME_SECS, AssertionClaims, JWT_AUDIENCE, JWT_SCOPE, sign_assertion};
pub use token::{AccessToken, CONSENT_REDIRECT_URI, TOKEN_GRANT_TYPE};
