/*
[INPUT]:  Integration key credentials from the environment
[OUTPUT]: Signed assertion and consent URL for the JWT-bearer flow
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When the grant flow changes
*/

use chrono::Utc;
use docusign_adapter::*;

/// Example: JWT-bearer authentication flow
///
/// This example demonstrates the offline half of the flow:
/// 1. Create HTTP client
/// 2. Load credentials from the environment
/// 3. Sign the RS256 assertion
/// 4. Print the consent URL an operator grants once
#[tokio::main]
async fn main() {
    println!("=== DocuSign JWT Flow Example ===\n");

    // Step 1: Create HTTP client
    let client = match DocusignClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created ({})", client.auth_base_url());

    // Step 2: Load credentials
    let credentials = Credentials {
        client_id: std::env::var("DOCUSIGN_CLIENT_ID").unwrap_or_default(),
        account_id: std::env::var("DOCUSIGN_ACCOUNT_ID").unwrap_or_default(),
        user_id: std::env::var("DOCUSIGN_USER_ID").unwrap_or_default(),
        private_key: std::env::var("DOCUSIGN_PRIVATE_KEY")
            .unwrap_or_default()
            .replace("\\n", "\n"),
    };

    if credentials.validate().is_err() {
        println!("\nNote: set DOCUSIGN_CLIENT_ID, DOCUSIGN_ACCOUNT_ID,");
        println!("DOCUSIGN_USER_ID and DOCUSIGN_PRIVATE_KEY to sign a real assertion,");
        println!("then exchange it with:");
        println!("  client.request_access_token(&credentials).await");
        return;
    }
    println!("✓ Credentials loaded for client id {}", credentials.client_id);

    // Step 3: Sign the assertion (valid for 10 minutes)
    match sign_assertion(&credentials, Utc::now()) {
        Ok(assertion) => {
            let preview: String = assertion.chars().take(40).collect();
            println!("✓ Assertion signed: {preview}...");
        }
        Err(e) => {
            eprintln!("Failed to sign assertion: {}", e);
            return;
        }
    }

    // Step 4: Consent URL (one-time operator action)
    println!("\nIf the token exchange reports consent_required, grant it here:");
    println!("  {}", client.consent_url(&credentials.client_id));

    println!("\n✓ JWT flow example complete");
}
