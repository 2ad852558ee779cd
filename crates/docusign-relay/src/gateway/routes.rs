/*
[INPUT]:  Caller HTTP requests (agreement submissions, OAuth callbacks)
[OUTPUT]: JSON responses after orchestrating the provider calls
[POS]:    Gateway layer - request handlers
[UPDATE]: When endpoints or response contracts change
*/

use axum::{
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::info;

use docusign_adapter::{DocusignError, Participant, SigningType, build_envelope_definition};

use super::AppState;

/// Data-URI prefix browsers prepend to uploaded PDF content
const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;base64,";

/// Wire shape of POST /api/docusign.
///
/// Parsed by hand from the raw JSON value so missing and mistyped fields
/// produce the fixed validation texts, in order, instead of a serde
/// rejection.
#[derive(Debug)]
pub struct SendAgreementRequest {
    pub participants: Vec<Participant>,
    pub signing_type: SigningType,
    pub file: String,
}

impl SendAgreementRequest {
    fn from_body(body: &Value) -> Result<Self, ApiError> {
        // Anything that is not a non-empty array counts as missing.
        let entries = match body.get("participants").and_then(Value::as_array) {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(ApiError::validation("Participants are required")),
        };

        let signing_type = body
            .get("signingType")
            .and_then(Value::as_str)
            .and_then(SigningType::parse)
            .ok_or_else(|| ApiError::validation("Invalid signing type"))?;

        // Entry fields pass through as-is; a malformed entry surfaces as a
        // provider rejection, not a local validation error.
        let participants = entries
            .iter()
            .map(|entry| Participant {
                name: field_string(entry, "name"),
                email: field_string(entry, "email"),
            })
            .collect();

        Ok(Self {
            participants,
            signing_type,
            file: field_string(body, "file"),
        })
    }
}

fn field_string(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Failures a handler can produce; every body is `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad caller input, reported before any provider call
    #[error("{0}")]
    Validation(String),

    /// Provider-side failure, surfaced as the stage's top-level message
    #[error(transparent)]
    Upstream(#[from] DocusignError),
}

impl ApiError {
    fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// POST /api/docusign
///
/// Validates the caller payload, then runs the three provider steps in
/// order: token exchange, base URI resolution, envelope submission. The
/// first failure stops the chain and becomes the response. Unparseable
/// bodies get the same 400 `{"error": ...}` shape as validation failures.
pub async fn create_envelope(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let request = SendAgreementRequest::from_body(&body)?;

    let document_base64 = request
        .file
        .strip_prefix(PDF_DATA_URI_PREFIX)
        .unwrap_or(&request.file);

    info!(
        participants = request.participants.len(),
        signing_type = ?request.signing_type,
        "creating envelope"
    );

    let token = state.client.request_access_token(&state.credentials).await?;
    let base_uri = state
        .client
        .resolve_account_base_uri(&token, &state.credentials.account_id)
        .await?;

    let definition =
        build_envelope_definition(&request.participants, request.signing_type, document_base64);
    let result = state
        .client
        .create_envelope(&base_uri, &state.credentials.account_id, &token, &definition)
        .await?;

    info!(envelope_id = ?result.envelope_id, "envelope created");

    Ok(Json(json!({
        "message": "Envelope created successfully",
        "result": result,
    })))
}

/// Query parameters of the OAuth redirect receiver
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// GET /api/docusign
///
/// Placeholder receiver for the consent redirect; echoes the code and
/// performs no token exchange.
pub async fn oauth_callback(
    Query(query): Query<CallbackQuery>,
) -> Result<Json<Value>, ApiError> {
    // An empty code parameter counts as missing.
    let Some(code) = query.code.filter(|code| !code.is_empty()) else {
        return Err(ApiError::validation("Authorization code is missing"));
    };

    info!(code = %code, "authorization code received");

    Ok(Json(json!({
        "message": "Callback received",
        "code": code,
    })))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_renders_400_with_error_body() {
        let response = ApiError::validation("Participants are required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_renders_500() {
        let response = ApiError::from(DocusignError::TokenExchange).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_parses_camel_case_fields() {
        let body = json!({
            "participants": [{"name": "A", "email": "a@example.com"}],
            "signingType": "notary",
            "file": "QUJD",
        });

        let request = SendAgreementRequest::from_body(&body).unwrap();
        assert_eq!(request.signing_type, SigningType::Notary);
        assert_eq!(request.participants.len(), 1);
        assert_eq!(request.file, "QUJD");
    }

    #[test]
    fn test_empty_body_reports_participants_first() {
        let err = SendAgreementRequest::from_body(&json!({})).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "Participants are required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_signing_type_is_invalid() {
        let body = json!({
            "participants": [{"name": "A", "email": "a@example.com"}],
            "signingType": 5,
            "file": "QUJD",
        });

        let err = SendAgreementRequest::from_body(&body).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "Invalid signing type"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_participant_entries_pass_through_without_shape_checks() {
        let body = json!({
            "participants": [{"name": "A"}],
            "signingType": "regular",
        });

        let request = SendAgreementRequest::from_body(&body).unwrap();
        assert_eq!(request.participants[0].name, "A");
        assert_eq!(request.participants[0].email, "");
        assert_eq!(request.file, "");
    }
}
