use serde::{Deserialize, Serialize};

/// Ordered severity scale for detected fallacies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallacySeverity {
    Minor,
    Moderate,
    Severe,
}

impl FallacySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// A reasoning error detected over the whole graph (not per-claim).
///
/// `fallacy_type` is an open vocabulary: the ten canonical names below are
/// what the oracle is asked to look for, but unlisted types are accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogicalFallacy {
    pub fallacy_type: String,
    /// Id of the claim where the fallacy occurs.
    pub location: String,
    pub explanation: String,
    pub severity: FallacySeverity,
}

/// Canonical fallacy vocabulary: (name, description) pairs.
pub const CANONICAL_FALLACIES: [(&str, &str); 10] = [
    ("strawman", "Misrepresenting opponent's position"),
    ("ad_hominem", "Attacking person instead of argument"),
    ("false_dichotomy", "Presenting only two options when more exist"),
    ("circular_reasoning", "Conclusion assumed in premises"),
    ("appeal_to_authority", "Citing authority instead of evidence"),
    ("slippery_slope", "Assuming chain reaction without justification"),
    ("hasty_generalization", "Drawing broad conclusion from limited data"),
    ("post_hoc", "Assuming causation from correlation/sequence"),
    ("appeal_to_emotion", "Using emotions instead of logic"),
    ("tu_quoque", "You too / hypocrisy attack"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(FallacySeverity::Minor < FallacySeverity::Moderate);
        assert!(FallacySeverity::Moderate < FallacySeverity::Severe);
    }

    #[test]
    fn test_severity_wire_names() {
        let s: FallacySeverity = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(s, FallacySeverity::Moderate);
    }
}
