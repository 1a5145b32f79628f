// crates/client-policy-core/src/core/event.rs
// ============================================================================
// Module: Policy Events
// Description: Lifecycle moments of a client interaction.
// Purpose: Provide the stable event tag used for dispatch and audit labels.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A policy event kind names the lifecycle point an evaluation belongs to.
//! Kinds are derived from the policy context variant, so a context can never
//! claim a kind whose payload it does not carry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Event Kind
// ============================================================================

/// Lifecycle point of a client interaction evaluated by the policy chain.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyEventKind {
    /// Authorization endpoint request received.
    AuthorizationRequest,
    /// Pushed authorization request received.
    PushedAuthorizationRequest,
    /// Token endpoint request (code exchange and other grants).
    TokenRequest,
    /// Refresh token grant.
    TokenRefresh,
    /// Token revocation request.
    TokenRevoke,
    /// Token introspection request.
    TokenIntrospect,
    /// Userinfo endpoint request.
    UserinfoRequest,
    /// Logout endpoint request.
    LogoutRequest,
    /// Backchannel authentication request.
    BackchannelAuthenticationRequest,
    /// Dynamic client registration.
    Register,
    /// Client metadata update.
    Update,
    /// Client metadata read.
    View,
    /// Client deregistration.
    Unregister,
}

impl PolicyEventKind {
    /// Returns a stable label for the event kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationRequest => "AUTHORIZATION_REQUEST",
            Self::PushedAuthorizationRequest => "PUSHED_AUTHORIZATION_REQUEST",
            Self::TokenRequest => "TOKEN_REQUEST",
            Self::TokenRefresh => "TOKEN_REFRESH",
            Self::TokenRevoke => "TOKEN_REVOKE",
            Self::TokenIntrospect => "TOKEN_INTROSPECT",
            Self::UserinfoRequest => "USERINFO_REQUEST",
            Self::LogoutRequest => "LOGOUT_REQUEST",
            Self::BackchannelAuthenticationRequest => "BACKCHANNEL_AUTHENTICATION_REQUEST",
            Self::Register => "REGISTER",
            Self::Update => "UPDATE",
            Self::View => "VIEW",
            Self::Unregister => "UNREGISTER",
        }
    }
}

impl fmt::Display for PolicyEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
