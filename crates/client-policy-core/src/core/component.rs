// crates/client-policy-core/src/core/component.rs
// ============================================================================
// Module: Executor Components
// Description: Stored executor definitions used to instantiate executors.
// Purpose: Carry the (name, provider id, configuration) triple to factories.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! An executor component is the persisted description of one executor. The
//! configuration blob is opaque to everything except the factory registered
//! for the component's provider identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::ExecutorName;
use crate::core::identifiers::ProviderId;

// ============================================================================
// SECTION: Component
// ============================================================================

/// Executor definition resolved from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorComponent {
    /// Executor label, unique within its chain.
    pub name: ExecutorName,
    /// Rule implementation identifier.
    pub provider_id: ProviderId,
    /// Provider-specific configuration.
    #[serde(default)]
    pub config: Value,
}

impl ExecutorComponent {
    /// Creates a component without configuration.
    #[must_use]
    pub fn new(name: impl Into<ExecutorName>, provider_id: impl Into<ProviderId>) -> Self {
        Self {
            name: name.into(),
            provider_id: provider_id.into(),
            config: Value::Null,
        }
    }

    /// Sets the provider-specific configuration.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// Returns true when no configuration was supplied.
    ///
    /// `null` and an empty object are both treated as empty.
    #[must_use]
    pub fn has_empty_config(&self) -> bool {
        match &self.config {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}
