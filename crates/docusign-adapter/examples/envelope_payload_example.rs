/*
[INPUT]:  Sample participants and document content
[OUTPUT]: Printed envelope payload as the API would receive it
[POS]:    Examples - envelope construction demonstration
[UPDATE]: When payload shape changes
*/

use docusign_adapter::*;

/// Example: Envelope payload construction
///
/// Shows the exact JSON submitted to the envelopes endpoint for a
/// two-signer agreement, first regular then notarized.
fn main() {
    println!("=== DocuSign Envelope Payload Example ===\n");

    let participants = vec![
        Participant {
            name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
        },
        Participant {
            name: "Bob Example".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // Stand-in for a real base64-encoded PDF.
    let document = EnvelopeDocument::from_pdf_bytes(b"%PDF-1.4 example agreement");
    println!("✓ Document encoded ({} base64 chars)", document.document_base64.len());

    let regular = build_envelope_definition(
        &participants,
        SigningType::Regular,
        &document.document_base64,
    );
    println!("\n--- regular signing ---");
    match serde_json::to_string_pretty(&regular) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize payload: {e}"),
    }

    let notary = build_envelope_definition(
        &participants,
        SigningType::Notary,
        &document.document_base64,
    );
    println!("\n--- notary signing ---");
    println!(
        "signers: {}, notaries: {}",
        notary.recipients.signers.len(),
        notary.recipients.notaries.as_ref().map_or(0, Vec::len)
    );

    println!("\n✓ Envelope payload example complete");
}
