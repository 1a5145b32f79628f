// crates/client-policy-executors/src/secure_session.rs
// ============================================================================
// Module: Secure Session Enforcement
// Description: Require nonce for OIDC requests and state for OAuth2 requests.
// Purpose: Reject authorization requests that cannot be bound to a session.
// Dependencies: client-policy-core, crate::registry
// ============================================================================

//! ## Overview
//! On an authorization request, an OIDC request (scope token `openid`) must
//! carry a `nonce`; any other request must carry a `state`. The decision is a
//! pure function of scope, nonce, and state. All other events pass untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use client_policy_core::AuthorizationEndpointRequest;
use client_policy_core::AuthorizationRequestContext;
use client_policy_core::ExecutorComponent;
use client_policy_core::ExecutorName;
use client_policy_core::PolicyContext;
use client_policy_core::PolicyExecutor;
use client_policy_core::ProviderId;
use client_policy_core::RejectionSignal;

use crate::registry::ExecutorConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Provider identifier of the secure session rule.
pub const SECURE_SESSION_PROVIDER_ID: &str = "secure-session";

/// Parameter required for OIDC requests.
const NONCE_PARAM: &str = "nonce";
/// Parameter required for plain OAuth2 requests.
const STATE_PARAM: &str = "state";

// ============================================================================
// SECTION: Executor
// ============================================================================

/// Executor enforcing `nonce` (OIDC) or `state` (OAuth2) on authorization requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureSessionEnforceExecutor {
    /// Configured executor label.
    name: ExecutorName,
    /// Provider identifier (always [`SECURE_SESSION_PROVIDER_ID`]).
    provider_id: ProviderId,
}

impl SecureSessionEnforceExecutor {
    /// Creates the executor under the given label.
    #[must_use]
    pub fn new(name: impl Into<ExecutorName>) -> Self {
        Self {
            name: name.into(),
            provider_id: ProviderId::new(SECURE_SESSION_PROVIDER_ID),
        }
    }

    /// Creates the executor from a stored component.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorConfigError`] when the component targets another
    /// provider or carries configuration (this rule takes none).
    pub fn from_component(component: &ExecutorComponent) -> Result<Self, ExecutorConfigError> {
        if component.provider_id.as_str() != SECURE_SESSION_PROVIDER_ID {
            return Err(ExecutorConfigError::ProviderMismatch {
                expected: ProviderId::new(SECURE_SESSION_PROVIDER_ID),
                actual: component.provider_id.clone(),
            });
        }
        if !component.has_empty_config() {
            return Err(ExecutorConfigError::Invalid(format!(
                "{SECURE_SESSION_PROVIDER_ID} takes no configuration"
            )));
        }
        Ok(Self::new(component.name.clone()))
    }

    /// Applies the rule to one authorization request.
    fn on_authorization_request(
        context: &AuthorizationRequestContext,
    ) -> Result<(), RejectionSignal> {
        match missing_parameter(context.request()) {
            Some(param) => Err(RejectionSignal::invalid_request(format!(
                "Missing parameter: {param}"
            ))
            .with_redirect_uri(context.redirect_uri())),
            None => Ok(()),
        }
    }
}

impl PolicyExecutor for SecureSessionEnforceExecutor {
    fn name(&self) -> &ExecutorName {
        &self.name
    }

    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn on_event(&self, context: &PolicyContext) -> Result<(), RejectionSignal> {
        match context {
            PolicyContext::AuthorizationRequest(authorization) => {
                Self::on_authorization_request(authorization)
            }
            // Pushed authorization requests are not enforced here.
            PolicyContext::PushedAuthorizationRequest(_)
            | PolicyContext::TokenRequest(_)
            | PolicyContext::TokenRefresh(_)
            | PolicyContext::TokenRevoke(_)
            | PolicyContext::TokenIntrospect(_)
            | PolicyContext::UserinfoRequest(_)
            | PolicyContext::LogoutRequest(_)
            | PolicyContext::BackchannelAuthenticationRequest(_)
            | PolicyContext::Register(_)
            | PolicyContext::Update(_)
            | PolicyContext::View(_)
            | PolicyContext::Unregister(_) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the required parameter the request lacks, if any.
fn missing_parameter(request: &AuthorizationEndpointRequest) -> Option<&'static str> {
    if request.is_oidc_request() {
        request.nonce().is_none().then_some(NONCE_PARAM)
    } else {
        request.state().is_none().then_some(STATE_PARAM)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_prefers_nonce_for_oidc() {
        let request = AuthorizationEndpointRequest::default().with_scope("openid");
        assert_eq!(missing_parameter(&request), Some("nonce"));
    }

    #[test]
    fn substring_openid_is_not_oidc() {
        let request = AuthorizationEndpointRequest::default().with_scope("fakeopenid");
        assert_eq!(missing_parameter(&request), Some("state"));
    }

    #[test]
    fn missing_scope_is_plain_oauth() {
        let request = AuthorizationEndpointRequest::default().with_nonce("n");
        assert_eq!(missing_parameter(&request), Some("state"));
    }
}
