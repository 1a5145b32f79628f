// crates/client-policy-executors/tests/proptest_secure_session.rs
// ============================================================================
// Module: Secure Session Property-Based Tests
// Description: Property tests for nonce/state enforcement.
// Purpose: Check the verdict is a pure function of scope, nonce, and state.
// ============================================================================

//! Property-based tests for secure session enforcement.

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
use client_policy_core::EndpointRequestContext;
use client_policy_core::OAuthErrorCode;
use client_policy_core::OidcResponseType;
use client_policy_core::PolicyContext;
use client_policy_core::PolicyExecutor;
use client_policy_core::RejectionSignal;
use client_policy_executors::SecureSessionEnforceExecutor;
use proptest::prelude::*;

fn evaluate(
    scope: &str,
    nonce: Option<String>,
    state: Option<String>,
) -> Result<(), RejectionSignal> {
    let request = AuthorizationEndpointRequest {
        scope: Some(scope.to_string()),
        nonce,
        state,
        ..AuthorizationEndpointRequest::default()
    };
    SecureSessionEnforceExecutor::new("enforcer").on_event(&PolicyContext::authorization_request(
        OidcResponseType::code(),
        request,
        "https://client.example.com/cb",
    ))
}

/// Scope tokens that never equal `openid` (some contain it as a substring).
fn non_openid_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("profile".to_string()),
        Just("email".to_string()),
        Just("offline_access".to_string()),
        Just("fakeopenid".to_string()),
        Just("openid2".to_string()),
        Just("OPENID".to_string()),
        "[a-z_]{1,12}".prop_filter("not openid", |token| token != "openid"),
    ]
}

/// Scope string without the `openid` token.
fn oauth_scope() -> impl Strategy<Value = String> {
    prop::collection::vec(non_openid_token(), 0 .. 5).prop_map(|tokens| tokens.join(" "))
}

/// Scope string that contains the `openid` token at a random position.
fn oidc_scope() -> impl Strategy<Value = String> {
    (prop::collection::vec(non_openid_token(), 0 .. 5), any::<prop::sample::Index>()).prop_map(
        |(mut tokens, index)| {
            let position = index.index(tokens.len() + 1);
            tokens.insert(position, "openid".to_string());
            tokens.join(" ")
        },
    )
}

fn present_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._~-]{1,32}"
}

proptest! {
    #[test]
    fn oidc_with_nonce_passes_for_any_state(
        scope in oidc_scope(),
        nonce in present_value(),
        state in proptest::option::of(present_value()),
    ) {
        prop_assert!(evaluate(&scope, Some(nonce), state).is_ok());
    }

    #[test]
    fn oidc_without_nonce_rejects_for_any_state(
        scope in oidc_scope(),
        state in proptest::option::of(present_value()),
    ) {
        let rejection = evaluate(&scope, None, state).unwrap_err();
        prop_assert_eq!(rejection.error_code(), OAuthErrorCode::InvalidRequest);
        prop_assert_eq!(rejection.description(), "Missing parameter: nonce");
    }

    #[test]
    fn oauth_with_state_passes_for_any_nonce(
        scope in oauth_scope(),
        nonce in proptest::option::of(present_value()),
        state in present_value(),
    ) {
        prop_assert!(evaluate(&scope, nonce, Some(state)).is_ok());
    }

    #[test]
    fn oauth_without_state_rejects_for_any_nonce(
        scope in oauth_scope(),
        nonce in proptest::option::of(present_value()),
    ) {
        let rejection = evaluate(&scope, nonce, None).unwrap_err();
        prop_assert_eq!(rejection.error_code(), OAuthErrorCode::InvalidRequest);
        prop_assert_eq!(rejection.description(), "Missing parameter: state");
    }

    #[test]
    fn verdict_is_deterministic(
        scope in prop_oneof![oidc_scope(), oauth_scope()],
        nonce in proptest::option::of(present_value()),
        state in proptest::option::of(present_value()),
    ) {
        let first = evaluate(&scope, nonce.clone(), state.clone());
        let second = evaluate(&scope, nonce, state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn other_events_always_pass(client_id in proptest::option::of(present_value()), repeats in 1usize .. 5) {
        let executor = SecureSessionEnforceExecutor::new("enforcer");
        let context = PolicyContext::TokenRefresh(EndpointRequestContext {
            client_id,
            params: Default::default(),
        });
        for _ in 0 .. repeats {
            prop_assert!(executor.on_event(&context).is_ok());
        }
    }
}
