//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use audit_attestor::{
    AnalysisResult, AttestationReceipt, AttestationSession, BoxError, NetworkSelector,
    SessionFactory, SubmissionEvent, SubmissionRequest, SubmissionTicket, VulnerabilityReport,
    WalletCredentials, WalletProvider,
};

/// Analysis fixture matching the documented submission scenario.
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult::new(
        4,
        "ok",
        VulnerabilityReport {
            high: vec!["reentrancy".to_string()],
            ..Default::default()
        },
    )
}

/// Receipt fixture matching the documented confirmation scenario.
pub fn sample_receipt() -> AttestationReceipt {
    AttestationReceipt {
        proof_hash: "0xabc".to_string(),
        attestation_id: 7,
        merkle_path: "0x01".to_string(),
        number_of_leaves: 4,
        index: 2,
    }
}

/// Wallet provider returning a fixed account list.
pub struct StaticProvider {
    pub accounts: Vec<String>,
    pub fail: bool,
}

impl StaticProvider {
    pub fn single_account() -> Self {
        Self {
            accounts: vec!["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string()],
            fail: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accounts: vec![],
            fail: true,
        }
    }
}

#[async_trait]
impl WalletProvider for StaticProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, BoxError> {
        if self.fail {
            return Err("user rejected the authorization request".into());
        }
        Ok(self.accounts.clone())
    }
}

/// Scripted behavior for a stub session's submission.
#[derive(Clone)]
pub enum SubmitScript {
    /// Outcome resolves with this receipt
    Resolve(AttestationReceipt),
    /// Outcome rejects with this message
    RejectOutcome(String),
    /// The submit call itself fails
    FailSubmission(String),
}

/// Session whose submission follows a fixed script.
///
/// Close invocations are counted so tests can assert the exactly-once
/// cleanup discipline.
pub struct ScriptedSession {
    pub script: SubmitScript,
    pub events: Vec<SubmissionEvent>,
    pub close_calls: Arc<AtomicUsize>,
    pub fail_close: bool,
}

impl ScriptedSession {
    pub fn resolving(receipt: AttestationReceipt) -> Self {
        Self {
            script: SubmitScript::Resolve(receipt),
            events: vec![],
            close_calls: Arc::new(AtomicUsize::new(0)),
            fail_close: false,
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            script: SubmitScript::RejectOutcome(message.to_string()),
            events: vec![],
            close_calls: Arc::new(AtomicUsize::new(0)),
            fail_close: false,
        }
    }

    pub fn with_events(mut self, events: Vec<SubmissionEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn with_failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

#[async_trait]
impl AttestationSession for ScriptedSession {
    async fn submit(&self, _request: SubmissionRequest) -> Result<SubmissionTicket, BoxError> {
        if let SubmitScript::FailSubmission(message) = &self.script {
            return Err(message.clone().into());
        }

        // Capacity covers every scripted event so buffering never blocks
        // before the flow starts draining.
        let (event_tx, event_rx) = mpsc::channel(self.events.len().max(1) + 1);
        for event in &self.events {
            event_tx.send(event.clone()).await.ok();
        }
        drop(event_tx);

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let outcome = match &self.script {
            SubmitScript::Resolve(receipt) => Ok(receipt.clone()),
            SubmitScript::RejectOutcome(message) => Err(BoxError::from(message.clone())),
            SubmitScript::FailSubmission(_) => unreachable!(),
        };
        outcome_tx.send(outcome).ok();

        Ok(SubmissionTicket {
            events: event_rx,
            outcome: outcome_rx,
        })
    }

    async fn close(&self) -> Result<(), BoxError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err("websocket already torn down".into());
        }
        Ok(())
    }
}

/// Factory handing out a single prepared session.
pub struct StaticFactory {
    session: Mutex<Option<ScriptedSession>>,
    pub connect_calls: Arc<AtomicUsize>,
    pub seen_network: Mutex<Option<NetworkSelector>>,
    pub seen_account: Mutex<Option<String>>,
}

impl StaticFactory {
    pub fn with_session(session: ScriptedSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            connect_calls: Arc::new(AtomicUsize::new(0)),
            seen_network: Mutex::new(None),
            seen_account: Mutex::new(None),
        }
    }

    /// Factory that fails every connection attempt.
    pub fn unreachable_network() -> Self {
        Self {
            session: Mutex::new(None),
            connect_calls: Arc::new(AtomicUsize::new(0)),
            seen_network: Mutex::new(None),
            seen_account: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SessionFactory for StaticFactory {
    async fn connect(
        &self,
        network: &NetworkSelector,
        credentials: WalletCredentials,
    ) -> Result<Box<dyn AttestationSession>, BoxError> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_network.lock().unwrap() = Some(network.clone());
        *self.seen_account.lock().unwrap() = Some(credentials.account_address);

        match self.session.lock().unwrap().take() {
            Some(session) => Ok(Box::new(session)),
            None => Err("network unreachable".into()),
        }
    }
}
