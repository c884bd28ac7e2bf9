use super::loader::{ConfigError, EngineConfig};

/// Validate the complete engine configuration.
///
/// Checks sane ranges on numeric parameters. The engine refuses to start on
/// validation failure.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_limits(config, &mut errors);
    validate_oracle(config, &mut errors);
    validate_retry(config, &mut errors);
    validate_cache(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}

fn validate_limits(config: &EngineConfig, errors: &mut Vec<String>) {
    let l = &config.system.limits;

    if l.min_input_chars == 0 {
        errors.push("limits.min_input_chars must be > 0".into());
    }
    if l.max_input_chars < l.min_input_chars {
        errors.push("limits.max_input_chars must be >= min_input_chars".into());
    }
    if l.max_dialectic_rounds == 0 {
        errors.push("limits.max_dialectic_rounds must be > 0".into());
    }
    if l.max_claims_per_analysis == 0 {
        errors.push("limits.max_claims_per_analysis must be > 0".into());
    }
}

fn validate_oracle(config: &EngineConfig, errors: &mut Vec<String>) {
    let validate_role =
        |role: &argus_common::config::LlmRoleConfig, name: &str, errors: &mut Vec<String>| {
            if role.provider.is_empty() {
                errors.push(format!("oracle.{}.provider must not be empty", name));
            }
            if role.model.is_empty() {
                errors.push(format!("oracle.{}.model must not be empty", name));
            }
            if role.max_tokens == 0 {
                errors.push(format!("oracle.{}.max_tokens must be > 0", name));
            }
            if let Some(temp) = role.temperature {
                if !(0.0..=2.0).contains(&temp) {
                    errors.push(format!(
                        "oracle.{}.temperature must be between 0.0 and 2.0",
                        name
                    ));
                }
            }
        };

    validate_role(&config.system.oracle.decompose, "decompose", errors);
    validate_role(&config.system.oracle.attack, "attack", errors);
    validate_role(&config.system.oracle.defend, "defend", errors);
    validate_role(&config.system.oracle.fallacy, "fallacy", errors);
}

fn validate_retry(config: &EngineConfig, errors: &mut Vec<String>) {
    let rc = &config.system.retry.oracle_api;

    if rc.max_attempts == 0 {
        errors.push("retry.oracle_api.max_attempts must be > 0".into());
    }
    if rc.initial_backoff_ms == 0 {
        errors.push("retry.oracle_api.initial_backoff_ms must be > 0".into());
    }
    if rc.max_backoff_ms < rc.initial_backoff_ms {
        errors.push("retry.oracle_api.max_backoff_ms must be >= initial_backoff_ms".into());
    }
    if rc.backoff_multiplier < 1.0 {
        errors.push("retry.oracle_api.backoff_multiplier must be >= 1.0".into());
    }
}

fn validate_cache(config: &EngineConfig, errors: &mut Vec<String>) {
    if config.system.cache.analysis_ttl_seconds == 0 {
        errors.push("cache.analysis_ttl_seconds must be > 0".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_common::config::{
        AnalysisLimits, CacheConfig, LlmRoleConfig, OracleConfig, RetryConfig, RetryDefaults,
        SystemConfig,
    };
    use std::path::PathBuf;

    fn role() -> LlmRoleConfig {
        LlmRoleConfig {
            provider: "anthropic".into(),
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 4000,
            temperature: Some(0.3),
        }
    }

    fn valid_config() -> EngineConfig {
        EngineConfig {
            system: SystemConfig {
                limits: AnalysisLimits {
                    min_input_chars: 10,
                    max_input_chars: 20_000,
                    max_dialectic_rounds: 10,
                    max_claims_per_analysis: 50,
                },
                oracle: OracleConfig {
                    decompose: role(),
                    attack: role(),
                    defend: role(),
                    fallacy: role(),
                },
                retry: RetryDefaults {
                    oracle_api: RetryConfig {
                        max_attempts: 3,
                        initial_backoff_ms: 500,
                        max_backoff_ms: 8000,
                        backoff_multiplier: 2.0,
                        jitter: true,
                    },
                },
                cache: CacheConfig {
                    analysis_ttl_seconds: 3600,
                },
            },
            config_dir: PathBuf::from("config"),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_inverted_input_bounds_rejected() {
        let mut config = valid_config();
        config.system.limits.max_input_chars = 5;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = valid_config();
        config.system.oracle.attack.temperature = Some(3.0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_rounds_limit_rejected() {
        let mut config = valid_config();
        config.system.limits.max_dialectic_rounds = 0;
        assert!(validate(&config).is_err());
    }
}
