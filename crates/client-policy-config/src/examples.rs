// crates/client-policy-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for client policy configuration. Output is deterministic
//! and must always load through [`crate::ClientPolicyConfig::from_toml_str`].

/// Returns a canonical example `client-policy.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[audit]
sink = "stderr"

[[profiles]]
name = "secure-session-profile"

[[profiles.executors]]
name = "enforce-nonce-or-state"
provider_id = "secure-session"

[[profiles]]
name = "open-profile"
"#,
    )
}
