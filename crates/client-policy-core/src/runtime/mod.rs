// crates/client-policy-core/src/runtime/mod.rs
// ============================================================================
// Module: Client Policy Runtime
// Description: Executor chain dispatch and audit sink implementations.
// Purpose: Run policy contexts through ordered executors.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime holds the executor chain, which is a pure dispatcher with
//! short-circuit semantics, and the stock audit sinks used to record each
//! evaluation step.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod chain;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::RecordingAuditSink;
pub use audit::StderrAuditSink;
pub use chain::ChainError;
pub use chain::ExecutorChain;
