use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Typed wrapper for analysis UUIDs. Generated by the engine, never by the
/// oracle; claim ids, by contrast, are oracle-assigned strings scoped to a
/// single graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AnalysisId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AnalysisId> for Uuid {
    fn from(id: AnalysisId) -> Self {
        id.0
    }
}
