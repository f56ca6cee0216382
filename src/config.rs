//! Attestor configuration
//!
//! Network selection, verifier key, and verification mode. Defaults target
//! the public test network with the placeholder audit verifier key.

use serde::{Deserialize, Serialize};

/// Verifier-key identifier used when none is configured.
///
/// Placeholder audit-attestation identifier, not a per-circuit verification
/// key.
pub const DEFAULT_VERIFIER_KEY: &str = "0x147AD899D1773f5De5e064C33088b58c7acb7acf";

/// Network endpoint the session factory connects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkSelector {
    /// Public test network
    Testnet,

    /// Custom endpoint URL
    Custom(String),
}

/// Proof system the network verifies a submission against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMode {
    /// FFLONK verifier, used for audit proofs
    Fflonk,

    /// Groth16 verifier
    Groth16,
}

/// Attestation submission configuration
#[derive(Debug, Clone)]
pub struct AttestorConfig {
    /// Network endpoint to open sessions against
    pub network: NetworkSelector,

    /// Verifier-key identifier included in proof inputs
    pub verifier_key: String,

    /// Proof system requested at submission
    pub mode: VerificationMode,

    /// Resolve the outcome only once the attestation is published, not
    /// merely accepted
    pub wait_for_published_attestation: bool,
}

impl Default for AttestorConfig {
    fn default() -> Self {
        Self {
            network: NetworkSelector::Testnet,
            verifier_key: DEFAULT_VERIFIER_KEY.to_string(),
            mode: VerificationMode::Fflonk,
            wait_for_published_attestation: true,
        }
    }
}

impl AttestorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let network = match std::env::var("ZKVERIFY_NETWORK_URL") {
            Ok(url) if !url.is_empty() => NetworkSelector::Custom(url),
            _ => NetworkSelector::Testnet,
        };

        let verifier_key = std::env::var("ZKVERIFY_VERIFIER_KEY")
            .unwrap_or_else(|_| DEFAULT_VERIFIER_KEY.to_string());

        let mode = match std::env::var("ZKVERIFY_VERIFICATION_MODE").as_deref() {
            Ok("groth16") => VerificationMode::Groth16,
            _ => VerificationMode::Fflonk,
        };

        let wait_for_published_attestation = std::env::var("ZKVERIFY_WAIT_FOR_PUBLISHED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            network,
            verifier_key,
            mode,
            wait_for_published_attestation,
        }
    }
}
