/*
[INPUT]:  Participants, signing type, base64 document content
[OUTPUT]: Envelope payload construction and submission
[POS]:    HTTP layer - envelope endpoint
[UPDATE]: When payload shape or submission endpoint changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Method;
use tracing::error;

use crate::auth::AccessToken;
use crate::http::{DocusignClient, DocusignError, Result};
use crate::types::{
    EnvelopeDefinition, EnvelopeDocument, EnvelopeSummary, NotaryRecipient, Participant,
    Recipients, SignHereTab, Signer, SigningType, Tabs,
};

/// Subject line on every envelope email
pub const EMAIL_SUBJECT: &str = "Please sign this agreement";

/// Fixed single-document attributes
pub const DOCUMENT_NAME: &str = "Agreement.pdf";
pub const DOCUMENT_FILE_EXTENSION: &str = "pdf";
pub const DOCUMENT_ID: &str = "1";

/// Signature placement, identical for every signer
const TAB_PAGE_NUMBER: &str = "1";
const TAB_X_POSITION: &str = "250";
const TAB_Y_POSITION: &str = "792";

/// Envelopes are dispatched immediately, no draft mode
const ENVELOPE_STATUS_SENT: &str = "sent";

impl EnvelopeDocument {
    /// Document entry from already-encoded base64 content
    pub fn from_base64(document_base64: impl Into<String>) -> Self {
        Self {
            document_base64: document_base64.into(),
            name: DOCUMENT_NAME.to_string(),
            file_extension: DOCUMENT_FILE_EXTENSION.to_string(),
            document_id: DOCUMENT_ID.to_string(),
        }
    }

    /// Document entry from raw PDF bytes
    pub fn from_pdf_bytes(bytes: &[u8]) -> Self {
        Self::from_base64(STANDARD.encode(bytes))
    }
}

/// Build the envelope payload for the given participants.
///
/// Participant order is meaningful: the signer at 0-based index i gets
/// recipientId and routingOrder (i + 1), and every signer receives the same
/// single sign-here placement on document "1". Notary signing adds a
/// parallel notaries list under the same numbering scheme.
pub fn build_envelope_definition(
    participants: &[Participant],
    signing_type: SigningType,
    document_base64: &str,
) -> EnvelopeDefinition {
    let signers = participants
        .iter()
        .enumerate()
        .map(|(index, participant)| {
            let position = (index + 1).to_string();
            Signer {
                email: participant.email.clone(),
                name: participant.name.clone(),
                recipient_id: position.clone(),
                routing_order: position,
                tabs: Tabs {
                    sign_here_tabs: vec![SignHereTab {
                        document_id: DOCUMENT_ID.to_string(),
                        page_number: TAB_PAGE_NUMBER.to_string(),
                        x_position: TAB_X_POSITION.to_string(),
                        y_position: TAB_Y_POSITION.to_string(),
                    }],
                },
            }
        })
        .collect();

    let notaries = match signing_type {
        SigningType::Notary => Some(
            participants
                .iter()
                .enumerate()
                .map(|(index, participant)| {
                    let position = (index + 1).to_string();
                    NotaryRecipient {
                        email: participant.email.clone(),
                        name: participant.name.clone(),
                        recipient_id: position.clone(),
                        routing_order: position,
                    }
                })
                .collect(),
        ),
        SigningType::Regular => None,
    };

    EnvelopeDefinition {
        email_subject: EMAIL_SUBJECT.to_string(),
        documents: vec![EnvelopeDocument::from_base64(document_base64)],
        recipients: Recipients { signers, notaries },
        status: ENVELOPE_STATUS_SENT.to_string(),
    }
}

impl DocusignClient {
    /// Create and immediately dispatch an envelope.
    ///
    /// POST {base_uri}/restapi/v2.1/accounts/{account_id}/envelopes
    ///
    /// The provider response body is returned unmodified. Failures surface
    /// as the envelope-stage message with the provider detail logged.
    pub async fn create_envelope(
        &self,
        base_uri: &str,
        account_id: &str,
        access_token: &AccessToken,
        definition: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary> {
        match self
            .submit_envelope(base_uri, account_id, access_token, definition)
            .await
        {
            Ok(summary) => Ok(summary),
            Err(err) => {
                error!(error = %err, "envelope submission failed");
                Err(DocusignError::EnvelopeSubmission)
            }
        }
    }

    async fn submit_envelope(
        &self,
        base_uri: &str,
        account_id: &str,
        access_token: &AccessToken,
        definition: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary> {
        let url = format!(
            "{}/restapi/v2.1/accounts/{}/envelopes",
            base_uri.trim_end_matches('/'),
            account_id
        );

        let builder = self
            .api_request(Method::POST, &url)?
            .bearer_auth(access_token.value())
            .json(definition);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn participants(count: usize) -> Vec<Participant> {
        (0..count)
            .map(|i| Participant {
                name: format!("Signer {}", i + 1),
                email: format!("signer{}@example.com", i + 1),
            })
            .collect()
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn test_signer_numbering_follows_participant_order(#[case] count: usize) {
        let definition =
            build_envelope_definition(&participants(count), SigningType::Regular, "QUJD");

        assert_eq!(definition.recipients.signers.len(), count);
        for (index, signer) in definition.recipients.signers.iter().enumerate() {
            let expected = (index + 1).to_string();
            assert_eq!(signer.recipient_id, expected);
            assert_eq!(signer.routing_order, expected);
            assert_eq!(signer.email, format!("signer{}@example.com", index + 1));
        }
    }

    #[test]
    fn test_regular_signing_omits_notaries() {
        let definition =
            build_envelope_definition(&participants(2), SigningType::Regular, "QUJD");
        assert!(definition.recipients.notaries.is_none());
    }

    #[test]
    fn test_notary_signing_adds_parallel_notary_list() {
        let definition =
            build_envelope_definition(&participants(3), SigningType::Notary, "QUJD");

        let notaries = definition.recipients.notaries.as_ref().unwrap();
        assert_eq!(notaries.len(), definition.recipients.signers.len());

        for (signer, notary) in definition.recipients.signers.iter().zip(notaries.iter()) {
            assert_eq!(signer.recipient_id, notary.recipient_id);
            assert_eq!(signer.routing_order, notary.routing_order);
            assert_eq!(signer.email, notary.email);
            assert_eq!(signer.name, notary.name);
        }
    }

    #[test]
    fn test_every_signer_gets_the_same_fixed_tab() {
        let definition =
            build_envelope_definition(&participants(2), SigningType::Regular, "QUJD");

        for signer in &definition.recipients.signers {
            assert_eq!(signer.tabs.sign_here_tabs.len(), 1);
            let tab = &signer.tabs.sign_here_tabs[0];
            assert_eq!(tab.document_id, "1");
            assert_eq!(tab.page_number, "1");
            assert_eq!(tab.x_position, "250");
            assert_eq!(tab.y_position, "792");
        }
    }

    #[test]
    fn test_envelope_constants() {
        let definition =
            build_envelope_definition(&participants(1), SigningType::Regular, "QUJD");

        assert_eq!(definition.email_subject, "Please sign this agreement");
        assert_eq!(definition.status, "sent");
        assert_eq!(definition.documents.len(), 1);

        let document = &definition.documents[0];
        assert_eq!(document.name, "Agreement.pdf");
        assert_eq!(document.file_extension, "pdf");
        assert_eq!(document.document_id, "1");
        assert_eq!(document.document_base64, "QUJD");
    }

    #[test]
    fn test_document_from_pdf_bytes_encodes_standard_base64() {
        let document = EnvelopeDocument::from_pdf_bytes(b"%PDF-1.4 fake");
        assert_eq!(document.document_base64, STANDARD.encode(b"%PDF-1.4 fake"));
        assert_eq!(document.name, "Agreement.pdf");
    }
}
