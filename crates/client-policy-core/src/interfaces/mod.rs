// crates/client-policy-core/src/interfaces/mod.rs
// ============================================================================
// Module: Client Policy Interfaces
// Description: Contract surfaces for policy executors and audit sinks.
// Purpose: Define how rules plug into the executor chain without the chain
//          knowing concrete rule types.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Executors are configured once and then shared across concurrent requests.
//! The [`PolicyExecutor`] trait therefore only exposes `&self` methods and
//! requires `Send + Sync`; an executor that needs per-request state cannot be
//! expressed without opting into interior mutability explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ExecutorName;
use crate::core::PolicyAuditEvent;
use crate::core::PolicyContext;
use crate::core::ProviderId;
use crate::core::RejectionSignal;

// ============================================================================
// SECTION: Policy Executor
// ============================================================================

/// Named, configured unit of client policy logic.
///
/// # Invariants
/// - `name` and `provider_id` are fixed at construction.
/// - `on_event` performs no I/O and mutates nothing.
pub trait PolicyExecutor: Send + Sync {
    /// Returns the configured executor label.
    fn name(&self) -> &ExecutorName;

    /// Returns the rule implementation identifier.
    fn provider_id(&self) -> &ProviderId;

    /// Evaluates one policy event.
    ///
    /// Executors return `Ok(())` immediately for event kinds they do not
    /// handle, without inspecting the context.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionSignal`] when the request must be refused.
    fn on_event(&self, context: &PolicyContext) -> Result<(), RejectionSignal>;
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Audit sink for executor evaluation events.
pub trait PolicyAuditSink: Send + Sync {
    /// Record an executor evaluation event.
    fn record(&self, event: &PolicyAuditEvent);
}
