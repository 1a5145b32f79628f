// crates/client-policy-core/tests/proptest_request.rs
// ============================================================================
// Module: Request Model Property-Based Tests
// Description: Property tests for scope tokens and response type parsing.
// Purpose: Check token matching and canonical response type rendering.
// ============================================================================

//! Property-based tests for scope membership and response types.

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

use client_policy_core::OidcResponseType;
use client_policy_core::has_scope;
use client_policy_core::is_oidc_request;
use proptest::prelude::*;

fn scope_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("openid".to_string()),
        Just("fakeopenid".to_string()),
        Just("OPENID".to_string()),
        "[a-z_:]{1,10}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![Just(" ".to_string()), Just("  ".to_string()), Just("\t".to_string())]
}

/// Scope tokens joined with arbitrary whitespace runs.
fn scope_with_tokens() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec((scope_token(), separator()), 0 .. 6).prop_map(|pairs| {
        let tokens: Vec<String> = pairs.iter().map(|(token, _)| token.clone()).collect();
        let scope: String =
            pairs.into_iter().map(|(token, separator)| format!("{separator}{token}")).collect();
        (tokens, scope)
    })
}

fn response_type_tokens() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(vec!["code", "id_token", "token"], 1 ..= 3).prop_shuffle()
}

proptest! {
    #[test]
    fn has_scope_matches_exact_tokens((tokens, scope) in scope_with_tokens(), target in scope_token()) {
        let expected = tokens.iter().any(|token| *token == target);
        prop_assert_eq!(has_scope(Some(&scope), &target), expected);
    }

    #[test]
    fn oidc_detection_requires_openid_token((tokens, scope) in scope_with_tokens()) {
        let expected = tokens.iter().any(|token| token == "openid");
        prop_assert_eq!(is_oidc_request(Some(&scope)), expected);
    }

    #[test]
    fn response_type_display_reparses(tokens in response_type_tokens()) {
        let parsed = OidcResponseType::parse(&tokens.join(" ")).unwrap();
        let rendered = parsed.to_string();
        let reparsed = OidcResponseType::parse(&rendered).unwrap();
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(reparsed.to_string(), rendered);
    }
}
