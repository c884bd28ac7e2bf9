//! Reasoning oracle contract and its LLM-backed implementation.
//!
//! The pipeline depends only on the [`ReasoningOracle`] trait; tests inject
//! scripted doubles, production injects [`LlmOracle`]. Swapping is explicit
//! dependency injection at construction time, never a global rebinding.

mod llm_oracle;
mod payload;
mod prompts;

use std::future::Future;
use std::pin::Pin;

use argus_common::types::{
    AtomicClaim, CounterArgument, DefenseArgument, LogicalFallacy, Persona,
};
use argus_common::ArgusError;

pub use llm_oracle::LlmOracle;

/// Errors from reasoning oracle calls.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Structured response failed to parse or validate into domain entities.
    #[error("malformed oracle output: {0}")]
    Malformed(String),

    /// The oracle could not be reached, or failed after the adapter's retry
    /// budget was exhausted.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

impl From<OracleError> for ArgusError {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::Malformed(msg) => ArgusError::OracleMalformed(msg),
            OracleError::Unavailable(msg) => ArgusError::OracleUnavailable(msg),
        }
    }
}

impl From<crate::llm::LlmError> for OracleError {
    fn from(e: crate::llm::LlmError) -> Self {
        // Provider transport and envelope failures are all "unavailable";
        // Malformed is reserved for payloads that reached us but failed to
        // validate into entities.
        OracleError::Unavailable(e.to_string())
    }
}

/// Object-safe capability interface for the four reasoning phases
/// (dyn dispatch). Tests provide scripted oracles; production uses
/// [`LlmOracle`].
pub trait ReasoningOracle: Send + Sync {
    /// Break an argument into atomic claims.
    fn decompose<'a>(
        &'a self,
        input_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AtomicClaim>, OracleError>> + Send + 'a>>;

    /// Generate adversarial attacks on one claim. Every returned attack
    /// targets the given claim's id.
    fn generate_attacks<'a>(
        &'a self,
        claim: &'a AtomicClaim,
        persona: Persona,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CounterArgument>, OracleError>> + Send + 'a>>;

    /// Produce the strongest version of a claim given the attacks against it.
    fn strengthen<'a>(
        &'a self,
        claim: &'a AtomicClaim,
        attacks: &'a [CounterArgument],
    ) -> Pin<Box<dyn Future<Output = Result<DefenseArgument, OracleError>> + Send + 'a>>;

    /// Scan the full claim set for logical fallacies.
    fn detect_fallacies<'a>(
        &'a self,
        claims: &'a [AtomicClaim],
        original_input: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LogicalFallacy>, OracleError>> + Send + 'a>>;
}
