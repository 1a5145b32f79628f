// crates/client-policy-cli/src/lib.rs
// ============================================================================
// Module: Client Policy CLI Library
// Description: Shared helpers for the client policy command-line interface.
// Purpose: Keep profile activation and verdict rendering testable off the binary.
// Dependencies: client-policy-config, client-policy-core, client-policy-executors
// ============================================================================

//! ## Overview
//! This library houses the activation and evaluation helpers used by the
//! `client-policy` binary. Inputs read from disk are untrusted and size-limited.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod evaluation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluation::*;
