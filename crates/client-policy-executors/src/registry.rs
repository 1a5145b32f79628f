// crates/client-policy-executors/src/registry.rs
// ============================================================================
// Module: Executor Registry
// Description: Registration table mapping provider identifiers to factories.
// Purpose: Instantiate executors from stored components at activation time.
// Dependencies: client-policy-core, crate::secure_session, thiserror
// ============================================================================

//! ## Overview
//! The registry resolves an [`ExecutorComponent`] to a factory by provider
//! identifier and builds executor chains for client profiles. Every
//! configuration defect (unknown provider, rejected configuration, duplicate
//! executor name) is reported here, so evaluation never fails on setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use client_policy_core::ChainError;
use client_policy_core::ExecutorChain;
use client_policy_core::ExecutorComponent;
use client_policy_core::ExecutorName;
use client_policy_core::PolicyExecutor;
use client_policy_core::ProviderId;
use thiserror::Error;

use crate::secure_session::SECURE_SESSION_PROVIDER_ID;
use crate::secure_session::SecureSessionEnforceExecutor;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Executor configuration errors reported by factories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorConfigError {
    /// Configuration blob is malformed or not accepted.
    #[error("invalid executor config: {0}")]
    Invalid(String),
    /// Component was routed to a factory for another provider.
    #[error("provider mismatch: expected {expected}, got {actual}")]
    ProviderMismatch {
        /// Provider the factory implements.
        expected: ProviderId,
        /// Provider named by the component.
        actual: ProviderId,
    },
}

/// Registry and activation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A factory is already registered for the provider.
    #[error("executor provider already registered: {0}")]
    DuplicateProvider(ProviderId),
    /// No factory is registered for the provider.
    #[error("executor provider not registered: {0}")]
    UnknownProvider(ProviderId),
    /// The factory rejected the component.
    #[error("executor {name} rejected: {source}")]
    Config {
        /// Executor label.
        name: ExecutorName,
        /// Factory error.
        #[source]
        source: ExecutorConfigError,
    },
    /// The executors do not form a valid chain.
    #[error("executor chain invalid: {0}")]
    Chain(#[from] ChainError),
}

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Factory function building an executor from its component.
pub type ExecutorFactory =
    fn(&ExecutorComponent) -> Result<Box<dyn PolicyExecutor>, ExecutorConfigError>;

/// Factory for [`SecureSessionEnforceExecutor`].
fn secure_session_factory(
    component: &ExecutorComponent,
) -> Result<Box<dyn PolicyExecutor>, ExecutorConfigError> {
    Ok(Box::new(SecureSessionEnforceExecutor::from_component(component)?))
}

// ============================================================================
// SECTION: Executor Registry
// ============================================================================

/// Executor factory registry.
///
/// # Invariants
/// - Provider identifiers are unique within the registry.
#[derive(Default)]
pub struct ExecutorRegistry {
    /// Factories keyed by provider identifier.
    factories: BTreeMap<ProviderId, ExecutorFactory>,
}

impl ExecutorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with built-in executors registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when built-in registration fails.
    pub fn with_builtin_executors() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_builtin_executors()?;
        Ok(registry)
    }

    /// Registers a factory under the given provider identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the provider identifier is already registered.
    pub fn register_factory(
        &mut self,
        provider_id: impl Into<ProviderId>,
        factory: ExecutorFactory,
    ) -> Result<(), RegistryError> {
        let provider_id = provider_id.into();
        if self.factories.contains_key(&provider_id) {
            return Err(RegistryError::DuplicateProvider(provider_id));
        }
        self.factories.insert(provider_id, factory);
        Ok(())
    }

    /// Registers built-in executor factories.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when a built-in provider is already registered.
    pub fn register_builtin_executors(&mut self) -> Result<(), RegistryError> {
        self.register_factory(SECURE_SESSION_PROVIDER_ID, secure_session_factory)
    }

    /// Returns true when a factory exists for the provider.
    #[must_use]
    pub fn contains(&self, provider_id: &ProviderId) -> bool {
        self.factories.contains_key(provider_id)
    }

    /// Returns registered provider identifiers in sorted order.
    pub fn provider_ids(&self) -> impl Iterator<Item = &ProviderId> {
        self.factories.keys()
    }

    /// Instantiates one executor from its component.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the provider is unknown or the factory
    /// rejects the component.
    pub fn instantiate(
        &self,
        component: &ExecutorComponent,
    ) -> Result<Box<dyn PolicyExecutor>, RegistryError> {
        let Some(factory) = self.factories.get(&component.provider_id) else {
            return Err(RegistryError::UnknownProvider(component.provider_id.clone()));
        };
        factory(component).map_err(|source| RegistryError::Config {
            name: component.name.clone(),
            source,
        })
    }

    /// Builds an executor chain from components in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when any component fails to instantiate or
    /// the executors do not form a valid chain.
    pub fn build_chain(
        &self,
        components: &[ExecutorComponent],
    ) -> Result<ExecutorChain, RegistryError> {
        let mut executors = Vec::with_capacity(components.len());
        for component in components {
            executors.push(self.instantiate(component)?);
        }
        Ok(ExecutorChain::new(executors)?)
    }
}

impl fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("providers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
