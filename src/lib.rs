//! Audit Attestor Library
//!
//! Client for submitting smart-contract audit attestations to a
//! zkVerify-style proof-verification network.
//!
//! A submission derives proof inputs by hashing the contract source and the
//! audit analysis result, opens a wallet-authenticated session with the
//! network, submits the inputs for verification, and waits for the published
//! attestation before returning its on-chain metadata.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (analysis results, proof inputs, receipts)
//! - [`crypto`] - Deterministic proof-input derivation
//! - [`infra`] - Collaborator traits and error types
//! - [`submit`] - End-to-end attestation submission flow
//! - [`config`] - Network, verifier-key, and verification-mode configuration
//! - [`telemetry`] - Tracing subscriber setup

pub mod config;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod submit;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AttestorConfig, NetworkSelector, VerificationMode, DEFAULT_VERIFIER_KEY};

pub use domain::{
    AnalysisResult, AttestationReceipt, ProofInputs, SubmissionEvent, SubmissionPhase,
    VulnerabilityReport,
};

pub use infra::{
    AttestationSession, AttestorError, BoxError, Result, SessionFactory, SubmissionOutcome,
    SubmissionRequest, SubmissionTicket, WalletCredentials, WalletProvider,
};

pub use submit::{AttestationService, EventObserver};
