use std::future::Future;
use std::pin::Pin;

use argus_common::config::{OracleConfig, RetryConfig};
use argus_common::types::{
    AtomicClaim, CounterArgument, DefenseArgument, LogicalFallacy, Persona,
};

use crate::llm::LlmClient;

use super::{payload, prompts, OracleError, ReasoningOracle};

/// LLM-backed reasoning oracle. One client per phase so that model and
/// temperature can differ between decomposition (precise) and attack
/// generation (creative).
pub struct LlmOracle {
    decompose: LlmClient,
    attack: LlmClient,
    defend: LlmClient,
    fallacy: LlmClient,
}

impl LlmOracle {
    /// Create the oracle from per-phase role configs.
    /// Returns None if any role's API key is not set.
    pub fn new(config: &OracleConfig, retry_config: &RetryConfig) -> Option<Self> {
        Some(Self {
            decompose: LlmClient::new(config.decompose.clone(), retry_config.clone())?,
            attack: LlmClient::new(config.attack.clone(), retry_config.clone())?,
            defend: LlmClient::new(config.defend.clone(), retry_config.clone())?,
            fallacy: LlmClient::new(config.fallacy.clone(), retry_config.clone())?,
        })
    }
}

impl ReasoningOracle for LlmOracle {
    fn decompose<'a>(
        &'a self,
        input_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AtomicClaim>, OracleError>> + Send + 'a>> {
        Box::pin(async move {
            let user = prompts::decompose_prompt(input_text);
            let raw = self
                .decompose
                .complete(prompts::DECOMPOSE_SYSTEM, &user)
                .await?;
            payload::parse_claims(&raw)
        })
    }

    fn generate_attacks<'a>(
        &'a self,
        claim: &'a AtomicClaim,
        persona: Persona,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CounterArgument>, OracleError>> + Send + 'a>> {
        Box::pin(async move {
            let user = prompts::attack_prompt(claim, persona);
            let raw = self.attack.complete(prompts::ATTACK_SYSTEM, &user).await?;
            payload::parse_attacks(&raw, &claim.id)
        })
    }

    fn strengthen<'a>(
        &'a self,
        claim: &'a AtomicClaim,
        attacks: &'a [CounterArgument],
    ) -> Pin<Box<dyn Future<Output = Result<DefenseArgument, OracleError>> + Send + 'a>> {
        Box::pin(async move {
            let user = prompts::defense_prompt(claim, attacks);
            let raw = self.defend.complete(prompts::DEFENSE_SYSTEM, &user).await?;
            payload::parse_defense(&raw, &claim.id)
        })
    }

    fn detect_fallacies<'a>(
        &'a self,
        claims: &'a [AtomicClaim],
        original_input: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LogicalFallacy>, OracleError>> + Send + 'a>> {
        Box::pin(async move {
            let user = prompts::fallacy_prompt(claims, original_input);
            let raw = self.fallacy.complete(prompts::FALLACY_SYSTEM, &user).await?;
            payload::parse_fallacies(&raw)
        })
    }
}
