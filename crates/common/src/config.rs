use serde::{Deserialize, Serialize};

/// Top-level system configuration, deserialized from system.toml.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemConfig {
    pub limits: AnalysisLimits,
    pub oracle: OracleConfig,
    pub retry: RetryDefaults,
    pub cache: CacheConfig,
}

/// Bounds enforced before any phase executes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisLimits {
    /// Minimum input length in characters. Shorter inputs are rejected.
    pub min_input_chars: u32,
    /// Maximum input length in characters.
    pub max_input_chars: u32,
    /// Upper bound on `rounds` for dialectic analyses.
    pub max_dialectic_rounds: u32,
    /// Upper bound on claims accepted from a single decomposition.
    pub max_claims_per_analysis: u32,
}

/// LLM provider and model configuration per reasoning phase.
///
/// Each phase gets its own role config so temperature can vary: decomposition
/// and fallacy detection want precision, attack generation wants creativity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleConfig {
    pub decompose: LlmRoleConfig,
    pub attack: LlmRoleConfig,
    pub defend: LlmRoleConfig,
    pub fallacy: LlmRoleConfig,
}

/// Configuration for a single LLM role.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmRoleConfig {
    /// Provider name ("anthropic" or "openai").
    pub provider: String,
    /// Model identifier (e.g. "claude-sonnet-4-20250514").
    pub model: String,
    /// Max tokens in the response.
    pub max_tokens: u32,
    /// Temperature (0.0–2.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Default retry parameters. Retry policy lives entirely in the oracle
/// adapter; the pipeline core never retries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryDefaults {
    pub oracle_api: RetryConfig,
}

/// Retry configuration for a specific target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

/// Cache TTL configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Completed-analysis cache TTL in seconds.
    pub analysis_ttl_seconds: u64,
}
