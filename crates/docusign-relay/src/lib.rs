/*
[INPUT]:  Public API exports for docusign-relay crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod gateway;

// Re-export main types for convenience
pub use config::RelayConfig;
pub use gateway::{AppState, create_router};
