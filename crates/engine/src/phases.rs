//! Phase executors: stateless adapters between the orchestrator and the
//! reasoning oracle. They route entities and record telemetry; they never
//! interpret content, and enforce nothing beyond what the data model already
//! enforces.

use argus_common::types::{
    AtomicClaim, CounterArgument, DefenseArgument, LogicalFallacy, Persona,
};

use crate::oracle::{OracleError, ReasoningOracle};

/// Phase 1: break an argument into atomic claims.
pub struct Decomposer;

impl Decomposer {
    pub async fn run(
        oracle: &dyn ReasoningOracle,
        input_text: &str,
    ) -> Result<Vec<AtomicClaim>, OracleError> {
        let claims = oracle.decompose(input_text).await?;
        tracing::debug!(claims = claims.len(), "Decomposition complete");
        metrics::counter!("phases.decompose.claims").increment(claims.len() as u64);
        Ok(claims)
    }
}

/// Phase 2: generate adversarial attacks on one claim.
pub struct Attacker;

impl Attacker {
    pub async fn run(
        oracle: &dyn ReasoningOracle,
        claim: &AtomicClaim,
        persona: Persona,
    ) -> Result<Vec<CounterArgument>, OracleError> {
        let attacks = oracle.generate_attacks(claim, persona).await?;
        tracing::debug!(
            claim_id = %claim.id,
            attacks = attacks.len(),
            "Attack generation complete"
        );
        metrics::counter!("phases.attack.attacks").increment(attacks.len() as u64);
        Ok(attacks)
    }
}

/// Phase 3: strengthen one claim against the attacks it received.
pub struct Defender;

impl Defender {
    pub async fn run(
        oracle: &dyn ReasoningOracle,
        claim: &AtomicClaim,
        attacks: &[CounterArgument],
    ) -> Result<DefenseArgument, OracleError> {
        let defense = oracle.strengthen(claim, attacks).await?;
        tracing::debug!(claim_id = %claim.id, "Defense complete");
        metrics::counter!("phases.defend.defenses").increment(1);
        Ok(defense)
    }
}

/// Phase 4: scan the whole claim set for logical fallacies.
pub struct FallacyDetector;

impl FallacyDetector {
    pub async fn run(
        oracle: &dyn ReasoningOracle,
        claims: &[AtomicClaim],
        original_input: &str,
    ) -> Result<Vec<LogicalFallacy>, OracleError> {
        let fallacies = oracle.detect_fallacies(claims, original_input).await?;
        tracing::debug!(fallacies = fallacies.len(), "Fallacy detection complete");
        metrics::counter!("phases.fallacy.detected").increment(fallacies.len() as u64);
        Ok(fallacies)
    }
}
