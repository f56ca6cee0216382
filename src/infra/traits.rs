//! Trait definitions for the verification network boundary
//!
//! The wallet provider, session factory, and session surface are abstract
//! capabilities so the submission flow can run against a substitute
//! implementation without a real network.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::{mpsc, oneshot};

use crate::config::{NetworkSelector, VerificationMode};
use crate::domain::{AttestationReceipt, ProofInputs, SubmissionEvent};

use super::BoxError;

/// Wallet credentials authenticating a session.
#[derive(Debug, Clone)]
pub struct WalletCredentials {
    /// Address of the authorized account backing the session
    pub account_address: String,
}

/// Derived proof inputs plus submission options.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// Verifier key, proof digest, and public signals
    pub proof_inputs: ProofInputs,

    /// Proof system the network should verify against
    pub mode: VerificationMode,

    /// Resolve the outcome only once the attestation is published, not
    /// merely accepted
    pub wait_for_published_attestation: bool,
}

/// Resolution of a submission: the final attestation record, or the
/// network-side failure that ended it.
pub type SubmissionOutcome = std::result::Result<AttestationReceipt, BoxError>;

/// Channels handed back by a submission.
///
/// `events` and `outcome` observe the same underlying operation
/// independently; no ordering holds between a delivered event and outcome
/// resolution.
#[derive(Debug)]
pub struct SubmissionTicket {
    /// Lifecycle notification stream
    pub events: mpsc::Receiver<SubmissionEvent>,

    /// Resolves exactly once with the final attestation record
    pub outcome: oneshot::Receiver<SubmissionOutcome>,
}

/// Wallet-style provider exposing account authorization.
///
/// Requesting accounts may suspend pending user approval in the host
/// environment.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the list of authorized account addresses
    async fn request_accounts(&self) -> std::result::Result<Vec<String>, BoxError>;
}

/// Factory negotiating wallet-authenticated sessions with the network.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// Open a session against the selected network endpoint
    async fn connect(
        &self,
        network: &NetworkSelector,
        credentials: WalletCredentials,
    ) -> std::result::Result<Box<dyn AttestationSession>, BoxError>;
}

/// An open session with the verification network.
///
/// A session is exclusively owned by a single submission flow and must be
/// closed exactly once.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttestationSession: Send + Sync {
    /// Submit derived proof inputs for verification
    async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> std::result::Result<SubmissionTicket, BoxError>;

    /// Terminate the session
    async fn close(&self) -> std::result::Result<(), BoxError>;
}
