// crates/client-policy-config/src/lib.rs
// ============================================================================
// Module: Client Policy Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for client-policy.toml semantics.
// Dependencies: client-policy-core, serde, toml
// ============================================================================

//! ## Overview
//! `client-policy-config` defines the configuration model for client policy
//! profiles. It provides strict, fail-closed validation and a canonical example
//! configuration.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
