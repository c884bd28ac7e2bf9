use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AnalysisId;
use crate::types::{ArgumentGraph, Persona, Stance};

/// POST /analyze request — full single-pass analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The argument to analyze.
    pub input_text: String,
    /// Analysis mode: attack, defense, dialectic, or neutral.
    #[serde(default = "default_stance")]
    pub stance: Stance,
    /// Argument style persona.
    #[serde(default = "default_persona")]
    pub persona: Persona,
    /// Whether to run fallacy detection.
    #[serde(default = "default_true")]
    pub detect_fallacies: bool,
}

/// POST /dialectic request — multi-round dialectic analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DialecticRequest {
    pub input_text: String,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_persona")]
    pub persona: Persona,
}

/// POST /quick-score request — fast robustness check.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickScoreRequest {
    pub input_text: String,
}

/// POST /analyze response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: AnalysisId,
    pub timestamp: DateTime<Utc>,
    pub graph: ArgumentGraph,
    pub execution_time_ms: f64,
}

/// POST /dialectic response. One graph per round, in round order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DialecticResponse {
    pub analysis_id: AnalysisId,
    pub timestamp: DateTime<Utc>,
    pub rounds: Vec<ArgumentGraph>,
    pub execution_time_ms: f64,
}

/// POST /quick-score response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickScoreResponse {
    pub input_text: String,
    pub robustness_score: f64,
    pub summary: String,
}

/// GET /personas entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonaInfo {
    pub value: String,
    pub name: String,
    pub description: String,
}

/// GET /stances entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StanceInfo {
    pub value: String,
    pub name: String,
    pub description: String,
}

fn default_stance() -> Stance {
    Stance::Dialectic
}

fn default_persona() -> Persona {
    Persona::Academic
}

fn default_true() -> bool {
    true
}

fn default_rounds() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_defaults() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"input_text": "AI will replace doctors"}"#).unwrap();
        assert_eq!(req.stance, Stance::Dialectic);
        assert_eq!(req.persona, Persona::Academic);
        assert!(req.detect_fallacies);
    }

    #[test]
    fn test_dialectic_request_defaults() {
        let req: DialecticRequest =
            serde_json::from_str(r#"{"input_text": "x", "persona": "reddit_atheist"}"#).unwrap();
        assert_eq!(req.rounds, 3);
        assert_eq!(req.persona, Persona::RedditAtheist);
    }
}
