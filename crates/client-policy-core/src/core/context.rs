// crates/client-policy-core/src/core/context.rs
// ============================================================================
// Module: Policy Contexts
// Description: Typed payloads for each policy event kind.
// Purpose: Make event-specific data reachable only through its own variant.
// Dependencies: crate::core::{event, request}, serde, serde_json
// ============================================================================

//! ## Overview
//! [`PolicyContext`] is a closed sum type: each variant owns exactly the data
//! its lifecycle point carries and the event kind is derived from the variant.
//! Executors pattern-match on the variants they care about, so reading
//! authorization request data from a token event cannot be expressed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::event::PolicyEventKind;
use crate::core::request::AuthorizationEndpointRequest;
use crate::core::request::OidcResponseType;

// ============================================================================
// SECTION: Authorization Request Context
// ============================================================================

/// Context for authorization endpoint requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequestContext {
    /// Response type parsed from the request.
    parsed_response_type: OidcResponseType,
    /// Parsed authorization endpoint request.
    request: AuthorizationEndpointRequest,
    /// Redirect URI already resolved against the client registration.
    redirect_uri: String,
}

impl AuthorizationRequestContext {
    /// Creates a new authorization request context.
    #[must_use]
    pub fn new(
        parsed_response_type: OidcResponseType,
        request: AuthorizationEndpointRequest,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            parsed_response_type,
            request,
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Returns the parsed response type.
    #[must_use]
    pub const fn parsed_response_type(&self) -> &OidcResponseType {
        &self.parsed_response_type
    }

    /// Returns the parsed authorization endpoint request.
    #[must_use]
    pub const fn request(&self) -> &AuthorizationEndpointRequest {
        &self.request
    }

    /// Returns the resolved redirect URI.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }
}

// ============================================================================
// SECTION: Token Endpoint Contexts
// ============================================================================

/// Context for token endpoint grant requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequestContext {
    /// Requested grant type.
    pub grant_type: String,
    /// Authenticated client identifier.
    pub client_id: Option<String>,
    /// Remaining form parameters.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

/// Context for endpoint requests that carry only client parameters
/// (refresh, revoke, introspect, userinfo, logout, backchannel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRequestContext {
    /// Authenticated client identifier.
    pub client_id: Option<String>,
    /// Request parameters.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

// ============================================================================
// SECTION: Client Registration Context
// ============================================================================

/// Context for client registration lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRegistrationContext {
    /// Client identifier (absent before registration completes).
    pub client_id: Option<String>,
    /// Submitted or stored client metadata.
    #[serde(default)]
    pub metadata: Value,
}

// ============================================================================
// SECTION: Policy Context
// ============================================================================

/// Typed policy context, one variant per event kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "context", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyContext {
    /// Authorization endpoint request.
    AuthorizationRequest(AuthorizationRequestContext),
    /// Pushed authorization request.
    PushedAuthorizationRequest(AuthorizationRequestContext),
    /// Token endpoint grant request.
    TokenRequest(TokenRequestContext),
    /// Refresh token grant.
    TokenRefresh(EndpointRequestContext),
    /// Token revocation.
    TokenRevoke(EndpointRequestContext),
    /// Token introspection.
    TokenIntrospect(EndpointRequestContext),
    /// Userinfo request.
    UserinfoRequest(EndpointRequestContext),
    /// Logout request.
    LogoutRequest(EndpointRequestContext),
    /// Backchannel authentication request.
    BackchannelAuthenticationRequest(EndpointRequestContext),
    /// Dynamic client registration.
    Register(ClientRegistrationContext),
    /// Client metadata update.
    Update(ClientRegistrationContext),
    /// Client metadata read.
    View(ClientRegistrationContext),
    /// Client deregistration.
    Unregister(ClientRegistrationContext),
}

impl PolicyContext {
    /// Builds an authorization request context.
    #[must_use]
    pub fn authorization_request(
        parsed_response_type: OidcResponseType,
        request: AuthorizationEndpointRequest,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self::AuthorizationRequest(AuthorizationRequestContext::new(
            parsed_response_type,
            request,
            redirect_uri,
        ))
    }

    /// Returns the event kind carried by this context.
    #[must_use]
    pub const fn event(&self) -> PolicyEventKind {
        match self {
            Self::AuthorizationRequest(_) => PolicyEventKind::AuthorizationRequest,
            Self::PushedAuthorizationRequest(_) => PolicyEventKind::PushedAuthorizationRequest,
            Self::TokenRequest(_) => PolicyEventKind::TokenRequest,
            Self::TokenRefresh(_) => PolicyEventKind::TokenRefresh,
            Self::TokenRevoke(_) => PolicyEventKind::TokenRevoke,
            Self::TokenIntrospect(_) => PolicyEventKind::TokenIntrospect,
            Self::UserinfoRequest(_) => PolicyEventKind::UserinfoRequest,
            Self::LogoutRequest(_) => PolicyEventKind::LogoutRequest,
            Self::BackchannelAuthenticationRequest(_) => {
                PolicyEventKind::BackchannelAuthenticationRequest
            }
            Self::Register(_) => PolicyEventKind::Register,
            Self::Update(_) => PolicyEventKind::Update,
            Self::View(_) => PolicyEventKind::View,
            Self::Unregister(_) => PolicyEventKind::Unregister,
        }
    }
}
