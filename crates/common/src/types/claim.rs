use serde::{Deserialize, Serialize};

/// Epistemic category of a claim. Drives categorization: normative claims are
/// value-dependent and never collapse; empirical claims earn a scoring bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// Testable, fact-based.
    Empirical,
    /// Value judgment, "should" statements.
    Normative,
    /// X causes Y.
    Causal,
    /// What something means.
    Definitional,
    /// Future-oriented.
    Predictive,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empirical => "empirical",
            Self::Normative => "normative",
            Self::Causal => "causal",
            Self::Definitional => "definitional",
            Self::Predictive => "predictive",
        }
    }
}

/// A single independently-verifiable proposition decomposed from an argument.
///
/// Claims are created by the decomposition phase and never mutated afterwards;
/// the owning `ArgumentGraph` is the sole authority for claim relations. The
/// `supports`/`contradicts` lists on each claim are the source of truth for
/// graph edges; the directed view is derived from them on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AtomicClaim {
    /// Oracle-assigned id, unique within one graph (e.g. "claim_1").
    pub id: String,
    pub text: String,
    pub claim_type: ClaimType,
    /// Hidden assumptions the claim relies on.
    #[serde(default)]
    pub assumptions: Vec<String>,
    /// What evidence would verify or falsify the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_required: Option<String>,
    /// Oracle confidence in [0,1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Ids of claims this claim supports (directional).
    #[serde(default)]
    pub supports: Vec<String>,
    /// Ids of claims this claim contradicts (directional).
    #[serde(default)]
    pub contradicts: Vec<String>,
}

impl AtomicClaim {
    pub fn new(id: impl Into<String>, text: impl Into<String>, claim_type: ClaimType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            claim_type,
            assumptions: Vec::new(),
            evidence_required: None,
            confidence: None,
            supports: Vec::new(),
            contradicts: Vec::new(),
        }
    }
}
