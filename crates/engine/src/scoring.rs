//! Belief scoring: claim survival classification and the robustness score.
//!
//! The only fully deterministic computation in the pipeline. Given identical
//! `(claims, attacks, fallacies)` the outputs are identical: no randomness,
//! no dependency on call order.

use argus_common::types::{
    ArgumentGraph, AtomicClaim, ClaimType, CounterArgument, FallacySeverity,
};

/// Survival weight: the most direct signal of defensibility.
const SURVIVAL_WEIGHT: f64 = 60.0;
/// Reward for empirical grounding.
const EMPIRICAL_WEIGHT: f64 = 20.0;
/// Penalty multiplier for detected fallacies.
const FALLACY_WEIGHT: f64 = 20.0;
/// Per-empirical-claim bonus before normalization.
const EMPIRICAL_BONUS_PER_CLAIM: f64 = 0.1;
/// Mean attack strength above which a claim collapses. Exactly 0.7 survives.
const COLLAPSE_THRESHOLD: f64 = 0.7;

/// Mutually exclusive classification of every claim in a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimPartition {
    pub survived: Vec<String>,
    pub collapsed: Vec<String>,
    pub value_dependent: Vec<String>,
}

/// Classify claims into survived / collapsed / value-dependent.
///
/// Walks claims in graph order, so order within each bucket follows the
/// original claim order. Normative claims short-circuit to value-dependent
/// regardless of attacks against them.
pub fn categorize_claims(claims: &[AtomicClaim], attacks: &[CounterArgument]) -> ClaimPartition {
    let mut partition = ClaimPartition::default();

    for claim in claims {
        if claim.claim_type == ClaimType::Normative {
            partition.value_dependent.push(claim.id.clone());
            continue;
        }

        let strengths: Vec<f64> = attacks
            .iter()
            .filter(|a| a.target_claim_id == claim.id)
            .map(|a| a.strength)
            .collect();

        if strengths.is_empty() {
            partition.survived.push(claim.id.clone());
            continue;
        }

        let avg_strength = strengths.iter().sum::<f64>() / strengths.len() as f64;
        if avg_strength > COLLAPSE_THRESHOLD {
            partition.collapsed.push(claim.id.clone());
        } else {
            partition.survived.push(claim.id.clone());
        }
    }

    partition
}

/// Score penalty contributed by one fallacy.
pub fn severity_penalty(severity: FallacySeverity) -> f64 {
    match severity {
        FallacySeverity::Minor => 0.1,
        FallacySeverity::Moderate => 0.2,
        FallacySeverity::Severe => 0.4,
    }
}

/// Compute the 0–100 robustness score for a categorized graph.
///
/// Total: succeeds for any valid graph, including one with zero claims or
/// empty attack/fallacy lists. The per-fallacy penalty is uncapped; only the
/// final result is clamped to [0,100].
pub fn robustness_score(graph: &ArgumentGraph) -> f64 {
    if graph.claims.is_empty() {
        return 0.0;
    }

    let claim_count = graph.claims.len() as f64;
    let survived_ratio = graph.survived_claims.len() as f64 / claim_count;

    let fallacy_penalty: f64 = graph
        .fallacies
        .iter()
        .map(|f| severity_penalty(f.severity))
        .sum();

    let empirical_count = graph
        .claims
        .iter()
        .filter(|c| c.claim_type == ClaimType::Empirical)
        .count() as f64;
    let empirical_bonus = EMPIRICAL_BONUS_PER_CLAIM * empirical_count / claim_count;

    let raw = survived_ratio * SURVIVAL_WEIGHT + empirical_bonus * EMPIRICAL_WEIGHT
        - fallacy_penalty * FALLACY_WEIGHT;

    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_common::types::{AttackVector, LogicalFallacy};
    use std::collections::HashSet;

    fn claim(id: &str, claim_type: ClaimType) -> AtomicClaim {
        AtomicClaim::new(id, format!("text {}", id), claim_type)
    }

    fn attack(target: &str, strength: f64) -> CounterArgument {
        CounterArgument::new(
            target,
            AttackVector::Counterexample,
            "counterpoint",
            None,
            strength,
        )
        .unwrap()
    }

    fn fallacy(location: &str, severity: FallacySeverity) -> LogicalFallacy {
        LogicalFallacy {
            fallacy_type: "strawman".into(),
            location: location.into(),
            explanation: "explanation".into(),
            severity,
        }
    }

    fn scored_graph(
        claims: Vec<AtomicClaim>,
        attacks: Vec<CounterArgument>,
        fallacies: Vec<LogicalFallacy>,
    ) -> ArgumentGraph {
        let mut graph = ArgumentGraph::new("input text", claims).unwrap();
        let partition = categorize_claims(&graph.claims, &attacks);
        graph.attacks = attacks;
        graph.fallacies = fallacies;
        graph.survived_claims = partition.survived;
        graph.collapsed_claims = partition.collapsed;
        graph.value_dependent_claims = partition.value_dependent;
        graph
    }

    #[test]
    fn test_partition_covers_every_claim_exactly_once() {
        let claims = vec![
            claim("c1", ClaimType::Empirical),
            claim("c2", ClaimType::Normative),
            claim("c3", ClaimType::Causal),
            claim("c4", ClaimType::Predictive),
        ];
        let attacks = vec![attack("c3", 0.9), attack("c4", 0.2)];

        let partition = categorize_claims(&claims, &attacks);

        let mut all: Vec<&String> = partition
            .survived
            .iter()
            .chain(partition.collapsed.iter())
            .chain(partition.value_dependent.iter())
            .collect();
        assert_eq!(all.len(), claims.len());
        let unique: HashSet<&String> = all.drain(..).collect();
        assert_eq!(unique.len(), claims.len());
    }

    #[test]
    fn test_normative_always_value_dependent() {
        let claims = vec![claim("c1", ClaimType::Normative)];
        // Even overwhelming attacks cannot collapse a normative claim.
        let attacks = vec![attack("c1", 1.0), attack("c1", 1.0)];

        let partition = categorize_claims(&claims, &attacks);
        assert_eq!(partition.value_dependent, vec!["c1"]);
        assert!(partition.collapsed.is_empty());
        assert!(partition.survived.is_empty());
    }

    #[test]
    fn test_unattacked_claim_survives() {
        let partition = categorize_claims(&[claim("c1", ClaimType::Empirical)], &[]);
        assert_eq!(partition.survived, vec!["c1"]);
    }

    #[test]
    fn test_collapse_threshold_boundary() {
        // Exactly 0.7 survives; strictly above collapses.
        let claims = vec![claim("c1", ClaimType::Empirical)];

        let at_boundary = categorize_claims(&claims, &[attack("c1", 0.7)]);
        assert_eq!(at_boundary.survived, vec!["c1"]);

        let above = categorize_claims(&claims, &[attack("c1", 0.71)]);
        assert_eq!(above.collapsed, vec!["c1"]);
    }

    #[test]
    fn test_collapse_uses_mean_strength() {
        let claims = vec![claim("c1", ClaimType::Empirical)];
        // Mean of 0.9 and 0.6 is 0.75, collapses.
        let partition = categorize_claims(&claims, &[attack("c1", 0.9), attack("c1", 0.6)]);
        assert_eq!(partition.collapsed, vec!["c1"]);

        // Mean of 0.9 and 0.3 is 0.6, survives.
        let partition = categorize_claims(&claims, &[attack("c1", 0.9), attack("c1", 0.3)]);
        assert_eq!(partition.survived, vec!["c1"]);
    }

    #[test]
    fn test_partition_preserves_claim_order() {
        let claims = vec![
            claim("c1", ClaimType::Empirical),
            claim("c2", ClaimType::Empirical),
            claim("c3", ClaimType::Empirical),
        ];
        let partition = categorize_claims(&claims, &[]);
        assert_eq!(partition.survived, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_empty_graph_scores_zero() {
        let graph = scored_graph(vec![], vec![], vec![]);
        assert_eq!(robustness_score(&graph), 0.0);
    }

    #[test]
    fn test_perfect_single_empirical_claim() {
        // 60·1 + 20·(0.1·1/1) − 0 = 62.0
        let graph = scored_graph(vec![claim("c1", ClaimType::Empirical)], vec![], vec![]);
        assert_eq!(graph.survived_claims, vec!["c1"]);
        let score = robustness_score(&graph);
        assert!((score - 62.0).abs() < 1e-9);
    }

    #[test]
    fn test_severe_fallacy_with_no_survivors_clamps_to_zero() {
        // 60·0 + 20·0.1 − 20·0.4 = −6 → clamped to 0.0
        let graph = scored_graph(
            vec![claim("c1", ClaimType::Empirical)],
            vec![attack("c1", 0.95)],
            vec![fallacy("c1", FallacySeverity::Severe)],
        );
        assert_eq!(graph.collapsed_claims, vec!["c1"]);
        assert_eq!(robustness_score(&graph), 0.0);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let graph = scored_graph(
            vec![
                claim("c1", ClaimType::Empirical),
                claim("c2", ClaimType::Normative),
                claim("c3", ClaimType::Causal),
            ],
            vec![attack("c1", 0.2), attack("c3", 0.95)],
            vec![
                fallacy("c1", FallacySeverity::Minor),
                fallacy("c2", FallacySeverity::Moderate),
                fallacy("c3", FallacySeverity::Severe),
            ],
        );
        let score = robustness_score(&graph);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_score_deterministic() {
        let build = || {
            scored_graph(
                vec![
                    claim("c1", ClaimType::Empirical),
                    claim("c2", ClaimType::Predictive),
                ],
                vec![attack("c2", 0.5), attack("c2", 0.65)],
                vec![fallacy("c2", FallacySeverity::Minor)],
            )
        };
        assert_eq!(robustness_score(&build()), robustness_score(&build()));
    }

    #[test]
    fn test_severity_penalties() {
        assert_eq!(severity_penalty(FallacySeverity::Minor), 0.1);
        assert_eq!(severity_penalty(FallacySeverity::Moderate), 0.2);
        assert_eq!(severity_penalty(FallacySeverity::Severe), 0.4);
    }
}
