/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod envelopes;
pub mod error;

pub use error::{DocusignError, Result};

pub use client::{ClientConfig, DocusignClient};
pub use envelopes::{
    DOCUMENT_FILE_EXTENSION, DOCUMENT_ID, DOCUMENT_NAME, EMAIL_SUBJECT, build_envelope_definition,
};
