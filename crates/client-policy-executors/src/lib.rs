// crates/client-policy-executors/src/lib.rs
// ============================================================================
// Module: Client Policy Executors
// Description: Built-in policy executors and the executor registry.
// Purpose: Turn stored executor components into ready-to-run executor chains.
// Dependencies: client-policy-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate ships the built-in client policy rules and a registry that maps
//! provider identifiers to factory functions. Configuration defects are
//! reported when executors are instantiated, before any request reaches a
//! chain.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod registry;
pub mod secure_session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use registry::ExecutorConfigError;
pub use registry::ExecutorFactory;
pub use registry::ExecutorRegistry;
pub use registry::RegistryError;
pub use secure_session::SECURE_SESSION_PROVIDER_ID;
pub use secure_session::SecureSessionEnforceExecutor;
