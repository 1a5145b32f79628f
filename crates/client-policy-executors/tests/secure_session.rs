// crates/client-policy-executors/tests/secure_session.rs
// ============================================================================
// Module: Secure Session Executor Tests
// Description: Validate nonce/state enforcement on authorization requests.
// Purpose: Pin the rejection codes and descriptions clients observe.
// Dependencies: client-policy-core, client-policy-executors
// ============================================================================

//! Secure session enforcement scenario tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use client_policy_core::AuthorizationEndpointRequest;
use client_policy_core::AuthorizationRequestContext;
use client_policy_core::ClientRegistrationContext;
use client_policy_core::EndpointRequestContext;
use client_policy_core::ExecutorComponent;
use client_policy_core::OAuthErrorCode;
use client_policy_core::OidcResponseType;
use client_policy_core::PolicyContext;
use client_policy_core::PolicyExecutor;
use client_policy_core::RejectionSignal;
use client_policy_core::TokenRequestContext;
use client_policy_executors::ExecutorConfigError;
use client_policy_executors::SECURE_SESSION_PROVIDER_ID;
use client_policy_executors::SecureSessionEnforceExecutor;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

const REDIRECT_URI: &str = "https://client.example.com/cb";

fn request(scope: &str, nonce: Option<&str>, state: Option<&str>) -> AuthorizationEndpointRequest {
    let mut request = AuthorizationEndpointRequest::default().with_scope(scope);
    request.nonce = nonce.map(str::to_string);
    request.state = state.map(str::to_string);
    request
}

fn evaluate(scope: &str, nonce: Option<&str>, state: Option<&str>) -> Result<(), RejectionSignal> {
    let executor = SecureSessionEnforceExecutor::new("secure-session-enforcer");
    executor.on_event(&PolicyContext::authorization_request(
        OidcResponseType::code(),
        request(scope, nonce, state),
        REDIRECT_URI,
    ))
}

fn assert_rejected(result: Result<(), RejectionSignal>, description: &str) {
    let rejection = result.expect_err("request should be rejected");
    assert_eq!(rejection.error_code(), OAuthErrorCode::InvalidRequest);
    assert_eq!(rejection.description(), description);
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

#[test]
fn oidc_request_with_nonce_and_no_state_passes() {
    assert!(evaluate("openid profile", Some("abc"), None).is_ok());
}

#[test]
fn oidc_request_without_nonce_is_rejected() {
    assert_rejected(evaluate("openid profile", None, Some("xyz")), "Missing parameter: nonce");
}

#[test]
fn oauth_request_with_state_and_no_nonce_passes() {
    assert!(evaluate("profile email", None, Some("xyz")).is_ok());
}

#[test]
fn oauth_request_without_state_is_rejected() {
    assert_rejected(evaluate("profile email", None, None), "Missing parameter: state");
}

#[test]
fn empty_nonce_counts_as_missing() {
    assert_rejected(evaluate("openid", Some(""), Some("xyz")), "Missing parameter: nonce");
}

#[test]
fn scope_containing_openid_as_substring_is_not_oidc() {
    assert!(evaluate("fakeopenid", None, Some("xyz")).is_ok());
    assert_rejected(evaluate("fakeopenid", Some("abc"), None), "Missing parameter: state");
}

#[test]
fn rejection_carries_redirect_uri() {
    let rejection = evaluate("openid", None, None).expect_err("nonce missing");
    assert_eq!(rejection.redirect_uri(), Some(REDIRECT_URI));
}

// ============================================================================
// SECTION: Other Events
// ============================================================================

#[test]
fn non_authorization_events_are_no_ops() {
    let executor = SecureSessionEnforceExecutor::new("secure-session-enforcer");
    let contexts = vec![
        PolicyContext::PushedAuthorizationRequest(AuthorizationRequestContext::new(
            OidcResponseType::code(),
            AuthorizationEndpointRequest::default(),
            REDIRECT_URI,
        )),
        PolicyContext::TokenRequest(TokenRequestContext {
            grant_type: "authorization_code".to_string(),
            client_id: None,
            params: Default::default(),
        }),
        PolicyContext::TokenRefresh(EndpointRequestContext::default()),
        PolicyContext::TokenRevoke(EndpointRequestContext::default()),
        PolicyContext::TokenIntrospect(EndpointRequestContext::default()),
        PolicyContext::UserinfoRequest(EndpointRequestContext::default()),
        PolicyContext::LogoutRequest(EndpointRequestContext::default()),
        PolicyContext::BackchannelAuthenticationRequest(EndpointRequestContext::default()),
        PolicyContext::Register(ClientRegistrationContext {
            client_id: None,
            metadata: json!({}),
        }),
        PolicyContext::Update(ClientRegistrationContext {
            client_id: Some("client-a".to_string()),
            metadata: json!({"client_name": "a"}),
        }),
        PolicyContext::View(ClientRegistrationContext {
            client_id: Some("client-a".to_string()),
            metadata: json!(null),
        }),
        PolicyContext::Unregister(ClientRegistrationContext {
            client_id: Some("client-a".to_string()),
            metadata: json!(null),
        }),
    ];
    for context in &contexts {
        for _ in 0 .. 3 {
            assert!(executor.on_event(context).is_ok(), "{:?} should pass", context.event());
        }
    }
}

// ============================================================================
// SECTION: Construction
// ============================================================================

#[test]
fn executor_reports_identity() {
    let executor = SecureSessionEnforceExecutor::new("enforcer");
    assert_eq!(executor.name().as_str(), "enforcer");
    assert_eq!(executor.provider_id().as_str(), SECURE_SESSION_PROVIDER_ID);
}

#[test]
fn from_component_accepts_empty_config() {
    let component = ExecutorComponent::new("enforcer", SECURE_SESSION_PROVIDER_ID)
        .with_config(json!({}));
    let executor = SecureSessionEnforceExecutor::from_component(&component).unwrap();
    assert_eq!(executor, SecureSessionEnforceExecutor::new("enforcer"));
}

#[test]
fn from_component_rejects_configuration() {
    let component = ExecutorComponent::new("enforcer", SECURE_SESSION_PROVIDER_ID)
        .with_config(json!({"require_state": true}));
    let error = SecureSessionEnforceExecutor::from_component(&component).unwrap_err();
    assert!(matches!(error, ExecutorConfigError::Invalid(_)));
}

#[test]
fn from_component_rejects_foreign_provider() {
    let component = ExecutorComponent::new("enforcer", "pkce-enforcer");
    let error = SecureSessionEnforceExecutor::from_component(&component).unwrap_err();
    assert!(matches!(error, ExecutorConfigError::ProviderMismatch { .. }));
}
