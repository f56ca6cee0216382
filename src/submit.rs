//! Attestation submission flow
//!
//! Submits derived audit proof inputs to the verification network and
//! relays the published attestation metadata.
//!
//! A submission moves through `provider_checked -> session_open ->
//! submitted -> {confirmed | failed} -> session_closed`. The session is
//! closed exactly once on every exit path, and a close failure never masks
//! an error already in flight.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AttestorConfig;
use crate::crypto::derive_proof_inputs;
use crate::domain::{AnalysisResult, AttestationReceipt, SubmissionEvent, SubmissionPhase};
use crate::infra::{
    AttestationSession, AttestorError, Result, SessionFactory, SubmissionRequest,
    SubmissionTicket, WalletCredentials, WalletProvider,
};

/// Observer invoked with every lifecycle event of a submission.
///
/// Observers serve logging and UI surfaces only; control flow never waits
/// on one.
pub type EventObserver = Box<dyn Fn(&SubmissionEvent) + Send + Sync + 'static>;

/// End-to-end attestation submission service.
///
/// The wallet provider is an explicit handle; a service constructed without
/// one fails every submission with `ProviderUnavailable` before touching
/// the network.
pub struct AttestationService {
    config: AttestorConfig,
    factory: Arc<dyn SessionFactory>,
    provider: Option<Arc<dyn WalletProvider>>,
}

impl AttestationService {
    /// Create a new attestation service without a wallet provider.
    pub fn new(config: AttestorConfig, factory: Arc<dyn SessionFactory>) -> Self {
        Self {
            config,
            factory,
            provider: None,
        }
    }

    /// Attach the wallet provider handle backing session authentication.
    pub fn with_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Submit an audit proof and wait for the published attestation.
    pub async fn submit_audit_proof(
        &self,
        contract_source: &str,
        analysis: &AnalysisResult,
    ) -> Result<AttestationReceipt> {
        self.submit_audit_proof_with_observer(contract_source, analysis, None)
            .await
    }

    /// Submit an audit proof, forwarding lifecycle events to `observer`.
    pub async fn submit_audit_proof_with_observer(
        &self,
        contract_source: &str,
        analysis: &AnalysisResult,
        observer: Option<EventObserver>,
    ) -> Result<AttestationReceipt> {
        let provider = self
            .provider
            .as_deref()
            .ok_or(AttestorError::ProviderUnavailable)?;
        debug!(
            phase = SubmissionPhase::ProviderChecked.as_str(),
            "wallet provider present"
        );

        let session = self.open_session(provider).await?;
        info!(
            phase = SubmissionPhase::SessionOpen.as_str(),
            network = ?self.config.network,
            "session open"
        );

        let result = self
            .submit_on_session(session.as_ref(), contract_source, analysis, observer)
            .await;

        // Exactly one close on every exit path.
        let closed = session.close().await;
        debug!(phase = SubmissionPhase::SessionClosed.as_str(), "session closed");

        match (result, closed) {
            (Ok(receipt), Ok(())) => Ok(receipt),
            (Ok(_), Err(cleanup)) => Err(AttestorError::CleanupFailed(cleanup)),
            (Err(primary), Ok(())) => Err(primary),
            (Err(primary), Err(cleanup)) => {
                warn!(error = %cleanup, "session cleanup failed after prior error");
                Err(primary)
            }
        }
    }

    async fn open_session(
        &self,
        provider: &dyn WalletProvider,
    ) -> Result<Box<dyn AttestationSession>> {
        let accounts = provider.request_accounts().await.map_err(|source| {
            AttestorError::SessionAcquisitionFailed {
                reason: "account authorization rejected".to_string(),
                source: Some(source),
            }
        })?;

        let account_address = accounts.into_iter().next().ok_or_else(|| {
            AttestorError::SessionAcquisitionFailed {
                reason: "no accounts authorized".to_string(),
                source: None,
            }
        })?;
        debug!(account = %account_address, "account authorized");

        self.factory
            .connect(&self.config.network, WalletCredentials { account_address })
            .await
            .map_err(|source| AttestorError::SessionAcquisitionFailed {
                reason: "session negotiation failed".to_string(),
                source: Some(source),
            })
    }

    async fn submit_on_session(
        &self,
        session: &dyn AttestationSession,
        contract_source: &str,
        analysis: &AnalysisResult,
        observer: Option<EventObserver>,
    ) -> Result<AttestationReceipt> {
        let proof_inputs =
            derive_proof_inputs(contract_source, analysis, &self.config.verifier_key);
        debug!(
            proof = %proof_inputs.proof,
            findings = analysis.finding_count(),
            "derived proof inputs"
        );

        let SubmissionTicket { mut events, outcome } = session
            .submit(SubmissionRequest {
                proof_inputs,
                mode: self.config.mode,
                wait_for_published_attestation: self.config.wait_for_published_attestation,
            })
            .await
            .map_err(|source| AttestorError::AttestationFailed {
                reason: "submission rejected".to_string(),
                source: Some(source),
            })?;
        info!(phase = SubmissionPhase::Submitted.as_str(), "proof submitted");

        // Fan-out: the event stream and the outcome observe the same
        // operation independently. The drain task is never awaited and
        // never gates the result.
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                if let SubmissionEvent::AttestationConfirmed { attestation_id } = &event {
                    info!(attestation_id = *attestation_id, "attestation confirmed");
                }
                if let Some(observer) = &observer {
                    observer(&event);
                }
            }
        });

        match outcome.await {
            Ok(Ok(receipt)) => {
                info!(
                    phase = SubmissionPhase::Confirmed.as_str(),
                    attestation_id = receipt.attestation_id,
                    "attestation published"
                );
                Ok(receipt)
            }
            Ok(Err(source)) => {
                warn!(phase = SubmissionPhase::Failed.as_str(), "verification rejected");
                Err(AttestorError::AttestationFailed {
                    reason: "verification rejected by network".to_string(),
                    source: Some(source),
                })
            }
            Err(_) => Err(AttestorError::AttestationFailed {
                reason: "outcome channel closed before resolution".to_string(),
                source: None,
            }),
        }
    }
}
