//! Deterministic proof-input derivation
//!
//! Derivation is a pure function of (contract source, analysis result):
//!
//! ```text
//! h_source   = keccak256(UTF8(contract_source))
//! h_analysis = keccak256(UTF8(canonical_analysis_json(analysis)))
//! h_proof    = keccak256(h_source(32) || h_analysis(32))
//! ```
//!
//! Both digests enter the final concatenation as raw 32-byte values. Hex
//! encodings are 0x-prefixed lowercase.

use alloy::primitives::{keccak256, B256};

use crate::domain::{AnalysisResult, ProofInputs};

/// Hex-encode a digest with the 0x prefix used across the attestation API.
pub fn encode_digest(digest: &B256) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Keccak-256 content hash of raw contract source text.
pub fn contract_source_hash(source: &str) -> B256 {
    keccak256(source.as_bytes())
}

/// Canonical JSON form of an analysis result.
///
/// Field order is fixed by the struct definition (stars, summary,
/// vulnerabilities{critical, high, medium, low}); equal results always
/// produce byte-identical JSON.
///
/// # Panics
///
/// Never panics in practice: the analysis struct contains only integers,
/// strings, and string lists, all of which serialize unconditionally.
pub fn canonical_analysis_json(analysis: &AnalysisResult) -> String {
    serde_json::to_string(analysis).expect("analysis result serializes to plain JSON")
}

/// Keccak-256 hash of the canonical analysis serialization.
///
/// This digest doubles as the disclosed public signal of the submission.
pub fn analysis_hash(analysis: &AnalysisResult) -> B256 {
    keccak256(canonical_analysis_json(analysis).as_bytes())
}

/// Derive the proof inputs submitted to the verification network.
///
/// The combined proof digest commits to both the contract source and the
/// analysis result; the public signal discloses only the analysis digest.
pub fn derive_proof_inputs(
    contract_source: &str,
    analysis: &AnalysisResult,
    verifier_key: &str,
) -> ProofInputs {
    let source_digest = contract_source_hash(contract_source);
    let analysis_digest = analysis_hash(analysis);

    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(source_digest.as_slice());
    preimage[32..].copy_from_slice(analysis_digest.as_slice());
    let proof_digest = keccak256(preimage);

    ProofInputs {
        vk: verifier_key.to_string(),
        proof: encode_digest(&proof_digest),
        public_signals: encode_digest(&analysis_digest),
    }
}
