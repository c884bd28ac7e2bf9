use serde::{Deserialize, Serialize};

/// A strengthened restatement of a claim produced by the defense phase.
/// At most one per claim per round; immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefenseArgument {
    pub original_claim_id: String,
    pub strengthened_claim: String,
    #[serde(default)]
    pub additional_support: Vec<String>,
    /// How each attack was addressed.
    #[serde(default)]
    pub removed_weaknesses: Vec<String>,
}
