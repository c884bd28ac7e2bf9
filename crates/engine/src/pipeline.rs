//! The ARGUS orchestrator: a fixed-topology, single-pass state machine per
//! analysis, plus the multi-round dialectic loop.
//!
//! Phase order is always Decompose → Attack (stance-gated) → Defend
//! (stance-gated) → DetectFallacies (opt-in) → Score. Scoring runs
//! unconditionally; any phase failure aborts the whole analysis and no
//! partial graph is surfaced.

use std::sync::Arc;

use tokio::task::JoinSet;

use argus_common::config::AnalysisLimits;
use argus_common::types::{
    ArgumentGraph, AtomicClaim, CounterArgument, DefenseArgument, Persona, Stance,
};
use argus_common::{ArgusError, Result};

use crate::oracle::ReasoningOracle;
use crate::phases::{Attacker, Decomposer, Defender, FallacyDetector};
use crate::scoring;

/// The orchestrator. Constructed with a concrete oracle implementation;
/// swapping oracles is a construction-time decision, never a runtime
/// rebinding.
pub struct Argus {
    oracle: Arc<dyn ReasoningOracle>,
    limits: AnalysisLimits,
}

impl Argus {
    pub fn new(oracle: Arc<dyn ReasoningOracle>, limits: AnalysisLimits) -> Self {
        Self { oracle, limits }
    }

    /// Run one full analysis pass.
    pub async fn analyze(
        &self,
        input_text: &str,
        stance: Stance,
        persona: Persona,
        detect_fallacies: bool,
    ) -> Result<ArgumentGraph> {
        self.validate_input(input_text)?;
        self.run_analysis(input_text, stance, persona, detect_fallacies)
            .await
    }

    /// Run `rounds` sequential dialectic analyses. Each round's strengthened
    /// claims seed the next round's input; a round with zero defenses passes
    /// its input through unchanged. Returns exactly `rounds` graphs (rounds
    /// are never short-circuited on convergence) and aborts the entire
    /// remaining sequence on the first failure.
    pub async fn dialectic(
        &self,
        input_text: &str,
        rounds: u32,
        persona: Persona,
    ) -> Result<Vec<ArgumentGraph>> {
        if rounds == 0 || rounds > self.limits.max_dialectic_rounds {
            return Err(ArgusError::Input(format!(
                "rounds must be in 1..={}, got {}",
                self.limits.max_dialectic_rounds, rounds
            )));
        }
        self.validate_input(input_text)?;

        let mut history = Vec::with_capacity(rounds as usize);
        let mut current_text = input_text.to_string();

        for round in 0..rounds {
            tracing::info!(round = round + 1, total = rounds, "Dialectic round starting");

            let graph = self
                .run_analysis(&current_text, Stance::Dialectic, persona, true)
                .await?;

            metrics::counter!("dialectic.rounds").increment(1);

            if !graph.defenses.is_empty() {
                current_text = graph
                    .defenses
                    .iter()
                    .map(|d| d.strengthened_claim.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
            }

            history.push(graph);
        }

        Ok(history)
    }

    /// The single-pass state machine. Input is already validated; dialectic
    /// rounds re-enter here directly so that oracle-generated round inputs
    /// are not re-subjected to caller input bounds.
    async fn run_analysis(
        &self,
        input_text: &str,
        stance: Stance,
        persona: Persona,
        detect_fallacies: bool,
    ) -> Result<ArgumentGraph> {
        metrics::counter!("analyses.started").increment(1);

        let result = self
            .run_phases(input_text, stance, persona, detect_fallacies)
            .await;

        match &result {
            Ok(graph) => {
                tracing::info!(
                    stance = stance.as_str(),
                    claims = graph.claims.len(),
                    attacks = graph.attacks.len(),
                    defenses = graph.defenses.len(),
                    fallacies = graph.fallacies.len(),
                    score = graph.robustness_score,
                    "Analysis complete"
                );
                metrics::counter!("analyses.completed").increment(1);
            }
            Err(e) => {
                tracing::error!(stance = stance.as_str(), error = %e, "Analysis failed");
                metrics::counter!("analyses.failed").increment(1);
            }
        }

        result
    }

    async fn run_phases(
        &self,
        input_text: &str,
        stance: Stance,
        persona: Persona,
        detect_fallacies: bool,
    ) -> Result<ArgumentGraph> {
        // Phase 1: decompose into claims.
        let claims = Decomposer::run(self.oracle.as_ref(), input_text).await?;

        if claims.len() as u32 > self.limits.max_claims_per_analysis {
            return Err(ArgusError::OracleMalformed(format!(
                "decomposition produced {} claims, limit is {}",
                claims.len(),
                self.limits.max_claims_per_analysis
            )));
        }

        // Graph construction enforces unique ids and referential integrity;
        // a violation means the oracle emitted a malformed claim set.
        let mut graph = ArgumentGraph::new(input_text, claims)
            .map_err(|e| ArgusError::OracleMalformed(e.to_string()))?;

        // Phase 2: generate attacks.
        if stance.runs_attack() {
            graph.attacks = self.generate_attacks(&graph.claims, persona).await?;
        }

        // Phase 3: generate defenses. Each claim is defended against exactly
        // the attacks targeting it, an empty list if the attack phase did
        // not run or produced none for that claim.
        if stance.runs_defense() {
            let mut defenses: Vec<DefenseArgument> = Vec::with_capacity(graph.claims.len());
            for claim in &graph.claims {
                let claim_attacks: Vec<CounterArgument> =
                    graph.attacks_on(&claim.id).into_iter().cloned().collect();
                let defense =
                    Defender::run(self.oracle.as_ref(), claim, &claim_attacks).await?;
                defenses.push(defense);
            }
            graph.defenses = defenses;
        }

        // Phase 4: fallacy detection (opt-in, independent of stance).
        if detect_fallacies {
            graph.fallacies =
                FallacyDetector::run(self.oracle.as_ref(), &graph.claims, input_text).await?;
        }

        // Phase 5: scoring. Always runs, never fails.
        let partition = scoring::categorize_claims(&graph.claims, &graph.attacks);
        graph.survived_claims = partition.survived;
        graph.collapsed_claims = partition.collapsed;
        graph.value_dependent_claims = partition.value_dependent;
        graph.robustness_score = Some(scoring::robustness_score(&graph));

        Ok(graph)
    }

    /// Fan the attack phase out across claims: the calls are independent, so
    /// they are dispatched concurrently and reassembled in claim order. The
    /// final attack sequence is therefore deterministic regardless of
    /// completion order. The first failure aborts the analysis; dropping the
    /// JoinSet cancels the in-flight remainder.
    async fn generate_attacks(
        &self,
        claims: &[AtomicClaim],
        persona: Persona,
    ) -> Result<Vec<CounterArgument>> {
        let mut tasks: JoinSet<(usize, Result<Vec<CounterArgument>>)> = JoinSet::new();

        for (index, claim) in claims.iter().enumerate() {
            let oracle = Arc::clone(&self.oracle);
            let claim = claim.clone();
            tasks.spawn(async move {
                let attacks = Attacker::run(oracle.as_ref(), &claim, persona)
                    .await
                    .map_err(ArgusError::from);
                (index, attacks)
            });
        }

        let mut per_claim: Vec<Option<Vec<CounterArgument>>> = vec![None; claims.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) =
                joined.map_err(|e| ArgusError::Internal(format!("attack task panicked: {}", e)))?;
            per_claim[index] = Some(result?);
        }

        Ok(per_claim.into_iter().flatten().flatten().collect())
    }

    fn validate_input(&self, input_text: &str) -> Result<()> {
        let chars = input_text.chars().count() as u32;
        if chars < self.limits.min_input_chars {
            return Err(ArgusError::Input(format!(
                "input text must be at least {} characters, got {}",
                self.limits.min_input_chars, chars
            )));
        }
        if chars > self.limits.max_input_chars {
            return Err(ArgusError::Input(format!(
                "input text must be at most {} characters, got {}",
                self.limits.max_input_chars, chars
            )));
        }
        Ok(())
    }
}
