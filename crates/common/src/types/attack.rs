use serde::{Deserialize, Serialize};

use crate::error::{ArgusError, Result};

/// Closed vocabulary of attack strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackVector {
    FalseCausality,
    WeakAssumption,
    Counterexample,
    AlternativeExplanation,
    MissingEvidence,
    ScopeLimitation,
    TemporalInvalidity,
    CategoryError,
}

impl AttackVector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FalseCausality => "false_causality",
            Self::WeakAssumption => "weak_assumption",
            Self::Counterexample => "counterexample",
            Self::AlternativeExplanation => "alternative_explanation",
            Self::MissingEvidence => "missing_evidence",
            Self::ScopeLimitation => "scope_limitation",
            Self::TemporalInvalidity => "temporal_invalidity",
            Self::CategoryError => "category_error",
        }
    }
}

/// An adversarial attack on a single claim. A claim may receive zero or many;
/// immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterArgument {
    pub target_claim_id: String,
    pub attack_vector: AttackVector,
    pub counterpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_evidence: Option<String>,
    /// Attack strength in the closed interval [0,1].
    pub strength: f64,
}

impl CounterArgument {
    /// Construct an attack, rejecting out-of-range strength.
    pub fn new(
        target_claim_id: impl Into<String>,
        attack_vector: AttackVector,
        counterpoint: impl Into<String>,
        supporting_evidence: Option<String>,
        strength: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&strength) || strength.is_nan() {
            return Err(ArgusError::Validation(format!(
                "attack strength must be in [0,1], got {}",
                strength
            )));
        }

        Ok(Self {
            target_claim_id: target_claim_id.into(),
            attack_vector,
            counterpoint: counterpoint.into(),
            supporting_evidence,
            strength,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_range_enforced() {
        assert!(CounterArgument::new("c1", AttackVector::Counterexample, "x", None, 0.0).is_ok());
        assert!(CounterArgument::new("c1", AttackVector::Counterexample, "x", None, 1.0).is_ok());
        assert!(CounterArgument::new("c1", AttackVector::Counterexample, "x", None, 1.01).is_err());
        assert!(CounterArgument::new("c1", AttackVector::Counterexample, "x", None, -0.1).is_err());
        assert!(
            CounterArgument::new("c1", AttackVector::Counterexample, "x", None, f64::NAN).is_err()
        );
    }

    #[test]
    fn test_attack_vector_wire_names() {
        let v: AttackVector = serde_json::from_str("\"false_causality\"").unwrap();
        assert_eq!(v, AttackVector::FalseCausality);
        assert!(serde_json::from_str::<AttackVector>("\"ad_lib\"").is_err());
    }
}
