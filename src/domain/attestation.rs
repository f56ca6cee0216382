//! Proof inputs and attestation metadata types

use serde::{Deserialize, Serialize};

/// Derived inputs handed to the verification network.
///
/// Ephemeral value type created fresh per submission; a deterministic
/// function of (contract source, analysis result) and the configured
/// verifier key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofInputs {
    /// Verifier-key identifier the network should validate against
    pub vk: String,

    /// Hex-encoded combined proof digest (0x-prefixed)
    pub proof: String,

    /// Hex-encoded public-signal digest (0x-prefixed)
    pub public_signals: String,
}

/// On-chain attestation metadata returned once the proof is published.
///
/// The five fields map 1:1 from the verification network's transaction
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationReceipt {
    /// Hash of the submitted proof as recorded by the network
    pub proof_hash: String,

    /// Identifier of the attestation batch containing the proof
    pub attestation_id: u64,

    /// Merkle path proving inclusion of the proof leaf
    pub merkle_path: String,

    /// Number of leaves in the attestation tree
    pub number_of_leaves: u32,

    /// Index of the proof leaf in the tree
    pub index: u32,
}

/// Lifecycle notifications emitted while a submission is in flight.
///
/// Events and the submission outcome observe the same underlying operation
/// independently; no ordering holds between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Transaction carrying the proof was included in a block
    IncludedInBlock { block_hash: String },

    /// Transaction was finalized
    Finalized,

    /// Attestation was published and confirmed by the network
    AttestationConfirmed { attestation_id: u64 },

    /// Network-side error notification
    Error { message: String },
}

/// Per-submission lifecycle phase.
///
/// Reified for structured logging; control flow never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    ProviderChecked,
    SessionOpen,
    Submitted,
    Confirmed,
    Failed,
    SessionClosed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::ProviderChecked => "provider_checked",
            SubmissionPhase::SessionOpen => "session_open",
            SubmissionPhase::Submitted => "submitted",
            SubmissionPhase::Confirmed => "confirmed",
            SubmissionPhase::Failed => "failed",
            SubmissionPhase::SessionClosed => "session_closed",
        }
    }
}
