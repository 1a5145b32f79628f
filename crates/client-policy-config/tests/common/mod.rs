// crates/client-policy-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for client-policy-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use client_policy_config::ClientPolicyConfig;
use client_policy_config::ConfigError;
use client_policy_config::ExecutorConfig;
use client_policy_config::ProfileConfig;

/// Parses a TOML string into a `ClientPolicyConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<ClientPolicyConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<ClientPolicyConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns an executor entry for the given name and provider.
pub fn executor(name: &str, provider_id: &str) -> ExecutorConfig {
    ExecutorConfig {
        name: name.to_string(),
        provider_id: provider_id.to_string(),
        config: None,
    }
}

/// Returns a profile with the given executors.
pub fn profile(name: &str, executors: Vec<ExecutorConfig>) -> ProfileConfig {
    ProfileConfig {
        name: name.to_string(),
        executors,
    }
}

/// Asserts that validation failed with a message containing `needle`.
pub fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}
