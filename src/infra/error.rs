//! Error types for the attestation submission flow

use thiserror::Error;

/// Boxed error surfaced by an external collaborator (wallet provider or
/// verification SDK), preserved as the source of flow errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while submitting an attestation
#[derive(Error, Debug)]
pub enum AttestorError {
    /// No wallet provider handle was supplied to the flow
    #[error("wallet provider unavailable")]
    ProviderUnavailable,

    /// Account authorization or session negotiation failed
    #[error("session acquisition failed: {reason}")]
    SessionAcquisitionFailed {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The verification network rejected the submission or its confirmation
    #[error("attestation failed: {reason}")]
    AttestationFailed {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Session termination failed with no prior error pending
    #[error("session cleanup failed")]
    CleanupFailed(#[source] BoxError),
}

/// Result type for attestor operations
pub type Result<T> = std::result::Result<T, AttestorError>;
