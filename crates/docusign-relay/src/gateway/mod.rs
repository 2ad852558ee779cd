/*
[INPUT]:  Shared client, credentials, and route handlers
[OUTPUT]: Configured axum router for the relay gateway
[POS]:    Gateway layer - router wiring and shared state
[UPDATE]: When adding routes or changing shared state
*/

pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use docusign_adapter::{Credentials, DocusignClient};

/// State shared across gateway handlers.
///
/// Credentials are immutable for the process lifetime; the client is the
/// only other shared piece, so requests stay fully independent.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<DocusignClient>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(client: DocusignClient, credentials: Credentials) -> Self {
        Self {
            client: Arc::new(client),
            credentials: Arc::new(credentials),
        }
    }
}

/// Create the gateway router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/docusign",
            post(routes::create_envelope).get(routes::oauth_callback),
        )
        // Health check
        .route("/health", get(routes::health))
        .with_state(state)
}
