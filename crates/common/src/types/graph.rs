use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ArgusError, Result};

use super::attack::CounterArgument;
use super::claim::{AtomicClaim, ClaimType};
use super::defense::DefenseArgument;
use super::fallacy::LogicalFallacy;

/// The aggregate result of one analysis pass.
///
/// Created empty-ish by the orchestrator, populated phase-by-phase, and handed
/// to the caller as the final artifact. Claim relations live on the claims
/// themselves; [`ArgumentGraph::to_directed`] is a derived projection, never a
/// second authoritative store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArgumentGraph {
    pub original_input: String,
    pub claims: Vec<AtomicClaim>,
    #[serde(default)]
    pub fallacies: Vec<LogicalFallacy>,
    #[serde(default)]
    pub attacks: Vec<CounterArgument>,
    #[serde(default)]
    pub defenses: Vec<DefenseArgument>,
    /// Robustness in [0,100]. None until scoring has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robustness_score: Option<f64>,
    /// Claim ids that withstood (or never received) attacks.
    #[serde(default)]
    pub survived_claims: Vec<String>,
    /// Claim ids defeated by attacks.
    #[serde(default)]
    pub collapsed_claims: Vec<String>,
    /// Normative claim ids that cannot be fact-checked.
    #[serde(default)]
    pub value_dependent_claims: Vec<String>,
}

impl ArgumentGraph {
    /// Build a graph from decomposed claims, enforcing referential integrity:
    /// claim ids must be unique and every `supports`/`contradicts` entry must
    /// reference a claim present in the same set. The directed view therefore
    /// never has dangling edges.
    pub fn new(original_input: impl Into<String>, claims: Vec<AtomicClaim>) -> Result<Self> {
        let mut ids: HashSet<&str> = HashSet::with_capacity(claims.len());
        for claim in &claims {
            if !ids.insert(claim.id.as_str()) {
                return Err(ArgusError::Validation(format!(
                    "duplicate claim id '{}'",
                    claim.id
                )));
            }
            if let Some(confidence) = claim.confidence {
                if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
                    return Err(ArgusError::Validation(format!(
                        "claim '{}' confidence must be in [0,1], got {}",
                        claim.id, confidence
                    )));
                }
            }
        }

        for claim in &claims {
            for referenced in claim.supports.iter().chain(claim.contradicts.iter()) {
                if !ids.contains(referenced.as_str()) {
                    return Err(ArgusError::Validation(format!(
                        "claim '{}' references unknown claim id '{}'",
                        claim.id, referenced
                    )));
                }
            }
        }

        Ok(Self {
            original_input: original_input.into(),
            claims,
            fallacies: Vec::new(),
            attacks: Vec::new(),
            defenses: Vec::new(),
            robustness_score: None,
            survived_claims: Vec::new(),
            collapsed_claims: Vec::new(),
            value_dependent_claims: Vec::new(),
        })
    }

    /// Look up a claim by id.
    pub fn claim(&self, id: &str) -> Option<&AtomicClaim> {
        self.claims.iter().find(|c| c.id == id)
    }

    /// All attacks targeting the given claim, in generation order.
    pub fn attacks_on(&self, claim_id: &str) -> Vec<&CounterArgument> {
        self.attacks
            .iter()
            .filter(|a| a.target_claim_id == claim_id)
            .collect()
    }

    /// Whether scoring has run and the classification partition is populated.
    pub fn is_scored(&self) -> bool {
        self.robustness_score.is_some()
    }

    /// Project the claim set into a directed view. Nodes are claim ids
    /// carrying text/type/confidence; edges are typed relations read from each
    /// claim's own `supports`/`contradicts` lists. Recomputed on every call.
    pub fn to_directed(&self) -> DirectedClaimView {
        let nodes = self
            .claims
            .iter()
            .map(|claim| ClaimNode {
                id: claim.id.clone(),
                text: claim.text.clone(),
                claim_type: claim.claim_type,
                confidence: claim.confidence,
            })
            .collect();

        let mut edges = Vec::new();
        for claim in &self.claims {
            for target in &claim.supports {
                edges.push(ClaimEdge {
                    source: claim.id.clone(),
                    target: target.clone(),
                    relation: ClaimRelation::Supports,
                });
            }
            for target in &claim.contradicts {
                edges.push(ClaimEdge {
                    source: claim.id.clone(),
                    target: target.clone(),
                    relation: ClaimRelation::Contradicts,
                });
            }
        }

        DirectedClaimView { nodes, edges }
    }
}

/// Edge type in the directed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimRelation {
    Supports,
    Contradicts,
}

/// A node in the directed view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimNode {
    pub id: String,
    pub text: String,
    pub claim_type: ClaimType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// A typed directed edge in the view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimEdge {
    pub source: String,
    pub target: String,
    pub relation: ClaimRelation,
}

/// Read-only projection of an [`ArgumentGraph`]'s claim relations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectedClaimView {
    pub nodes: Vec<ClaimNode>,
    pub edges: Vec<ClaimEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, claim_type: ClaimType) -> AtomicClaim {
        AtomicClaim::new(id, format!("claim text for {}", id), claim_type)
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let claims = vec![claim("c1", ClaimType::Empirical), claim("c1", ClaimType::Causal)];
        assert!(ArgumentGraph::new("input", claims).is_err());
    }

    #[test]
    fn test_rejects_dangling_relation() {
        let mut c = claim("c1", ClaimType::Empirical);
        c.supports.push("c99".into());
        assert!(ArgumentGraph::new("input", vec![c]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let mut c = claim("c1", ClaimType::Empirical);
        c.confidence = Some(1.5);
        assert!(ArgumentGraph::new("input", vec![c]).is_err());
    }

    #[test]
    fn test_directed_view_projection() {
        let mut c1 = claim("c1", ClaimType::Empirical);
        c1.supports.push("c2".into());
        let mut c2 = claim("c2", ClaimType::Causal);
        c2.contradicts.push("c1".into());

        let graph = ArgumentGraph::new("input", vec![c1, c2]).unwrap();
        let view = graph.to_directed();

        assert_eq!(view.nodes.len(), 2);
        assert_eq!(view.edges.len(), 2);
        assert_eq!(view.edges[0].source, "c1");
        assert_eq!(view.edges[0].target, "c2");
        assert_eq!(view.edges[0].relation, ClaimRelation::Supports);
        assert_eq!(view.edges[1].relation, ClaimRelation::Contradicts);
    }

    #[test]
    fn test_attacks_on_preserves_generation_order() {
        use crate::types::{AttackVector, CounterArgument};

        let mut graph =
            ArgumentGraph::new("input", vec![claim("c1", ClaimType::Empirical)]).unwrap();
        graph.attacks.push(
            CounterArgument::new("c1", AttackVector::MissingEvidence, "first", None, 0.3).unwrap(),
        );
        graph.attacks.push(
            CounterArgument::new("c1", AttackVector::Counterexample, "second", None, 0.9).unwrap(),
        );

        let on_c1 = graph.attacks_on("c1");
        assert_eq!(on_c1.len(), 2);
        assert_eq!(on_c1[0].counterpoint, "first");
        assert_eq!(on_c1[1].counterpoint, "second");
        assert!(graph.attacks_on("c2").is_empty());
    }
}
