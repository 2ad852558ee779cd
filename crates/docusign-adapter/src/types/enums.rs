/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// How an envelope is routed for signature.
///
/// `Notary` keeps the regular signer list and adds a parallel
/// notary-recipient list with the same id/order scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningType {
    Regular,
    Notary,
}

impl SigningType {
    /// Parse the caller-supplied wire value ("regular" / "notary").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(SigningType::Regular),
            "notary" => Some(SigningType::Notary),
            _ => None,
        }
    }
}
