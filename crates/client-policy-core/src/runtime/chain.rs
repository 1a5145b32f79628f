// crates/client-policy-core/src/runtime/chain.rs
// ============================================================================
// Module: Executor Chain
// Description: Ordered dispatch of policy contexts to executors.
// Purpose: Combine executor verdicts with first-rejection short-circuiting.
// Dependencies: crate::{core, interfaces, runtime::audit}, thiserror
// ============================================================================

//! ## Overview
//! An [`ExecutorChain`] owns the executors of one client profile. Evaluation
//! hands the same context to each executor in configured order and returns
//! the first [`RejectionSignal`] unmodified; later executors do not run. The
//! chain never inspects event contents, so new rules need no chain changes.
//! Name uniqueness is checked at construction, never during evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::ExecutorName;
use crate::core::PolicyAuditEvent;
use crate::core::PolicyAuditEventParams;
use crate::core::PolicyContext;
use crate::core::PolicyOutcome;
use crate::core::ProfileName;
use crate::core::RejectionSignal;
use crate::interfaces::PolicyAuditSink;
use crate::interfaces::PolicyExecutor;
use crate::runtime::audit::NoopAuditSink;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Chain construction errors (configuration defects).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// An executor has an empty name.
    #[error("executor name is empty")]
    EmptyExecutorName,
    /// Two executors share a name.
    #[error("duplicate executor name: {0}")]
    DuplicateExecutorName(ExecutorName),
}

// ============================================================================
// SECTION: Executor Chain
// ============================================================================

/// Ordered executor collection for one client profile.
///
/// # Invariants
/// - Executor names are non-empty and unique within the chain.
/// - Executors run strictly in insertion order.
pub struct ExecutorChain {
    /// Profile label recorded in audit events.
    profile: Option<ProfileName>,
    /// Executors in evaluation order.
    executors: Vec<Box<dyn PolicyExecutor>>,
    /// Audit sink receiving one event per executor run.
    audit: Arc<dyn PolicyAuditSink>,
}

impl ExecutorChain {
    /// Creates a chain from executors in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when an executor name is empty or duplicated.
    pub fn new(executors: Vec<Box<dyn PolicyExecutor>>) -> Result<Self, ChainError> {
        let mut seen = BTreeSet::new();
        for executor in &executors {
            let name = executor.name();
            if name.as_str().trim().is_empty() {
                return Err(ChainError::EmptyExecutorName);
            }
            if !seen.insert(name.clone()) {
                return Err(ChainError::DuplicateExecutorName(name.clone()));
            }
        }
        Ok(Self {
            profile: None,
            executors,
            audit: Arc::new(NoopAuditSink),
        })
    }

    /// Creates a chain without executors; every evaluation passes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profile: None,
            executors: Vec::new(),
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Sets the profile label recorded in audit events.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<ProfileName>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn PolicyAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the profile label, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&ProfileName> {
        self.profile.as_ref()
    }

    /// Returns the number of executors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.executors.len()
    }

    /// Returns true when the chain has no executors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    /// Returns executor names in evaluation order.
    pub fn executor_names(&self) -> impl Iterator<Item = &ExecutorName> {
        self.executors.iter().map(|executor| executor.name())
    }

    /// Evaluates one policy context against every executor in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RejectionSignal`] raised by an executor.
    pub fn evaluate(&self, context: PolicyContext) -> Result<(), RejectionSignal> {
        for executor in &self.executors {
            let verdict = executor.on_event(&context);
            self.record(executor.as_ref(), &context, verdict.as_ref().err());
            verdict?;
        }
        Ok(())
    }

    /// Records the outcome of one executor run.
    fn record(
        &self,
        executor: &dyn PolicyExecutor,
        context: &PolicyContext,
        rejection: Option<&RejectionSignal>,
    ) {
        let outcome = if rejection.is_some() { PolicyOutcome::Reject } else { PolicyOutcome::Pass };
        let event = PolicyAuditEvent::new(PolicyAuditEventParams {
            profile: self.profile.clone(),
            executor: executor.name().clone(),
            provider_id: executor.provider_id().clone(),
            policy_event: context.event(),
            outcome,
            error_code: rejection.map(RejectionSignal::error_code),
            reason: rejection.map(|rejection| rejection.description().to_string()),
        });
        self.audit.record(&event);
    }
}

impl fmt::Debug for ExecutorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorChain")
            .field("profile", &self.profile)
            .field("executors", &self.executor_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
