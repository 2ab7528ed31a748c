//! Wallet DTOs carried inside `Right` payloads and request bodies.
//!
//! # Design
//! These mirror the mock backend's schema but are defined independently;
//! the integration tests catch drift between the two crates.

use serde::{Deserialize, Serialize};

/// Spending assurance level of a wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assurance {
    #[default]
    Normal,
    Strict,
}

/// A wallet as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub assurance: Assurance,
    /// Balance in the smallest currency unit.
    pub balance: u64,
}

/// Request payload for creating a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    #[serde(default)]
    pub assurance: Assurance,
}

/// Request payload for updating a wallet's metadata. Omitted fields stay
/// unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assurance: Option<Assurance>,
}
