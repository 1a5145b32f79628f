// crates/client-policy-core/src/lib.rs
// ============================================================================
// Module: Client Policy Core Library
// Description: Public API surface for the client policy core.
// Purpose: Expose policy events, executor contracts, and the executor chain.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Client policy core defines the admission-control gate applied to inbound
//! OAuth/OIDC requests before they reach session or token subsystems. Typed
//! policy contexts are dispatched through an ordered chain of executors and the
//! first rejection aborts the request with a protocol-level error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::PolicyAuditSink;
pub use interfaces::PolicyExecutor;
pub use runtime::ChainError;
pub use runtime::ExecutorChain;
pub use runtime::FileAuditSink;
pub use runtime::NoopAuditSink;
pub use runtime::RecordingAuditSink;
pub use runtime::StderrAuditSink;
