//! Structured payload parsing for LLM oracle responses.
//!
//! Converts raw model text into domain entities, enforcing everything the
//! data model requires: known claim types and attack vectors, strength and
//! severity within range. Any violation is a malformed-output error; the
//! analysis aborts rather than surfacing a partial graph.

use serde::Deserialize;

use argus_common::types::{
    AtomicClaim, AttackVector, ClaimType, CounterArgument, DefenseArgument, FallacySeverity,
    LogicalFallacy,
};

use super::OracleError;

/// Strip a markdown code fence if the model wrapped its JSON in one.
pub fn extract_json(text: &str) -> &str {
    if let Some(start) = text.find("```json") {
        let after = &text[start + "```json".len()..];
        if let Some(end) = after.find("```") {
            return after[..end].trim();
        }
    }
    text.trim()
}

#[derive(Deserialize)]
struct ClaimsPayload {
    claims: Vec<ClaimPayload>,
}

#[derive(Deserialize)]
struct ClaimPayload {
    id: String,
    text: String,
    claim_type: ClaimType,
    #[serde(default)]
    assumptions: Vec<String>,
    #[serde(default)]
    evidence_required: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    supports: Vec<String>,
    #[serde(default)]
    contradicts: Vec<String>,
}

#[derive(Deserialize)]
struct AttacksPayload {
    attacks: Vec<AttackPayload>,
}

#[derive(Deserialize)]
struct AttackPayload {
    attack_vector: AttackVector,
    counterpoint: String,
    #[serde(default)]
    supporting_evidence: Option<String>,
    strength: f64,
}

#[derive(Deserialize)]
struct DefensePayload {
    strengthened_claim: String,
    #[serde(default)]
    additional_support: Vec<String>,
    #[serde(default)]
    removed_weaknesses: Vec<String>,
}

#[derive(Deserialize)]
struct FallaciesPayload {
    #[serde(default)]
    fallacies: Vec<FallacyPayload>,
}

#[derive(Deserialize)]
struct FallacyPayload {
    fallacy_type: String,
    location: String,
    explanation: String,
    severity: FallacySeverity,
}

/// Parse a decomposition response into claims.
pub fn parse_claims(raw: &str) -> Result<Vec<AtomicClaim>, OracleError> {
    let payload: ClaimsPayload = serde_json::from_str(extract_json(raw))
        .map_err(|e| OracleError::Malformed(format!("decomposition payload: {}", e)))?;

    Ok(payload
        .claims
        .into_iter()
        .map(|c| AtomicClaim {
            id: c.id,
            text: c.text,
            claim_type: c.claim_type,
            assumptions: c.assumptions,
            evidence_required: c.evidence_required,
            confidence: c.confidence,
            supports: c.supports,
            contradicts: c.contradicts,
        })
        .collect())
}

/// Parse an attack response. Every attack targets the given claim id.
pub fn parse_attacks(raw: &str, target_claim_id: &str) -> Result<Vec<CounterArgument>, OracleError> {
    let payload: AttacksPayload = serde_json::from_str(extract_json(raw))
        .map_err(|e| OracleError::Malformed(format!("attack payload: {}", e)))?;

    payload
        .attacks
        .into_iter()
        .map(|a| {
            CounterArgument::new(
                target_claim_id,
                a.attack_vector,
                a.counterpoint,
                a.supporting_evidence,
                a.strength,
            )
            .map_err(|e| OracleError::Malformed(format!("attack payload: {}", e)))
        })
        .collect()
}

/// Parse a defense response for the given claim.
pub fn parse_defense(raw: &str, original_claim_id: &str) -> Result<DefenseArgument, OracleError> {
    let payload: DefensePayload = serde_json::from_str(extract_json(raw))
        .map_err(|e| OracleError::Malformed(format!("defense payload: {}", e)))?;

    Ok(DefenseArgument {
        original_claim_id: original_claim_id.to_string(),
        strengthened_claim: payload.strengthened_claim,
        additional_support: payload.additional_support,
        removed_weaknesses: payload.removed_weaknesses,
    })
}

/// Parse a fallacy-detection response.
pub fn parse_fallacies(raw: &str) -> Result<Vec<LogicalFallacy>, OracleError> {
    let payload: FallaciesPayload = serde_json::from_str(extract_json(raw))
        .map_err(|e| OracleError::Malformed(format!("fallacy payload: {}", e)))?;

    Ok(payload
        .fallacies
        .into_iter()
        .map(|f| LogicalFallacy {
            fallacy_type: f.fallacy_type,
            location: f.location,
            explanation: f.explanation,
            severity: f.severity,
        })
        .collect())
}
