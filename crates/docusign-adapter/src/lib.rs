/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DocuSign adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AccessToken,
    AssertionClaims,
    CONSENT_REDIRECT_URI,
    sign_assertion,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DocusignClient,
    DocusignError,
    Result,
    build_envelope_definition,
};

// Re-export all types
pub use types::*;
