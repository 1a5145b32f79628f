// crates/client-policy-core/src/core/audit.rs
// ============================================================================
// Module: Policy Audit Events
// Description: Structured audit records for executor evaluations.
// Purpose: Describe one evaluation step without exposing request payloads.
// Dependencies: crate::core::{event, identifiers, rejection}, serde
// ============================================================================

//! ## Overview
//! Each executor that runs during a chain evaluation yields one
//! [`PolicyAuditEvent`]. Rejections are audit/info events, not system faults.
//! Events carry labels and the rejection reason only; request parameters such
//! as nonce or state values are never recorded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::event::PolicyEventKind;
use crate::core::identifiers::ExecutorName;
use crate::core::identifiers::ProfileName;
use crate::core::identifiers::ProviderId;
use crate::core::rejection::OAuthErrorCode;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Executor evaluation outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyOutcome {
    /// Executor allowed the request.
    Pass,
    /// Executor rejected the request.
    Reject,
}

impl PolicyOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Reject => "reject",
        }
    }
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Executor evaluation audit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Client profile label when the chain has one.
    pub profile: Option<ProfileName>,
    /// Executor label.
    pub executor: ExecutorName,
    /// Rule implementation identifier.
    pub provider_id: ProviderId,
    /// Policy event kind being evaluated.
    pub policy_event: PolicyEventKind,
    /// Evaluation outcome.
    pub outcome: PolicyOutcome,
    /// Error code when rejected.
    pub error_code: Option<OAuthErrorCode>,
    /// Rejection description when rejected.
    pub reason: Option<String>,
}

/// Inputs required to construct a policy audit event.
pub struct PolicyAuditEventParams {
    /// Client profile label when the chain has one.
    pub profile: Option<ProfileName>,
    /// Executor label.
    pub executor: ExecutorName,
    /// Rule implementation identifier.
    pub provider_id: ProviderId,
    /// Policy event kind being evaluated.
    pub policy_event: PolicyEventKind,
    /// Evaluation outcome.
    pub outcome: PolicyOutcome,
    /// Error code when rejected.
    pub error_code: Option<OAuthErrorCode>,
    /// Rejection description when rejected.
    pub reason: Option<String>,
}

impl PolicyAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: PolicyAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "client_policy_executor",
            timestamp_ms,
            profile: params.profile,
            executor: params.executor,
            provider_id: params.provider_id,
            policy_event: params.policy_event,
            outcome: params.outcome,
            error_code: params.error_code,
            reason: params.reason,
        }
    }
}
